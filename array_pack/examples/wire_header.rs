use array_pack::prelude::*;
use std::sync::Arc;

/// A record type from the host that only knows how to name itself.
#[derive(Debug)]
struct Hostname(String);

impl HostObject for Hostname {
    fn class_name(&self) -> &str {
        "Hostname"
    }

    fn to_str(&self) -> Option<Value> {
        Some(Value::from(self.0.as_str()))
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), PackError> {
    println!("=== Wire Header Example ===\n");

    // magic, version, flags, host, checksum seed, ratio
    let values = [
        Value::from(0x5041_434B),
        Value::from(2),
        Value::from(0b1010),
        Value::Object(Arc::new(Hostname("node-7".into()))),
        Value::from(-1),
        Value::from(0.75),
    ];
    let template = "N C C  # magic, version, flags\n Z15 x3 s> G";

    let packer = Packer::with_config(PackConfig::with_layout(NativeLayout::LP64_LE));
    let header = packer.pack(&values, template)?;

    println!("Template: {template:?}");
    println!("Packed {} bytes ({})", header.len(), header.encoding());
    for (i, line) in header.as_bytes().chunks(8).enumerate() {
        println!("  {:04x}: {}", i * 8, hex(line));
    }

    // --- Text armoring ---
    let body = [Value::from("héllo, wire = ok")];
    for template in ["m", "m0", "u", "M"] {
        let packed = packer.pack(&body, template)?;
        println!(
            "\n{template:>2} -> {:?} [{}]",
            String::from_utf8_lossy(packed.as_bytes()),
            packed.encoding()
        );
    }

    // --- Errors come back typed ---
    match packer.pack(&values[..2], template) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\n✓ Short input rejected: {e} ({:?}, {})", e.kind(), e.exception_class()),
    }

    Ok(())
}
