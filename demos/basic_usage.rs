// ============================================================================
// Basic Usage Example
// ============================================================================

use magstr::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== magstr Example ===\n");

    // Encode a few magnitudes with both bases
    println!("Encoding...");
    let mut out = HumanReadableStr::new();
    for value in [0u64, 999, 1024, 120_000, 1_500_000, u64::MAX] {
        let decimal = encode_unsigned(&mut out, value, Some("B"), 0, false, false).to_string();
        let binary = encode_unsigned(&mut out, value, Some("B"), 0, true, false).to_string();
        println!("  {:>20} -> {:<12} | {}", value, decimal, binary);
    }

    // Decode configuration style values
    println!("\nDecoding...");
    for text in ["1.5 k", "2 M", "1 Ki", "18446744073709551615999", "-3 G"] {
        match decode_signed(text, 0, false) {
            Ok(value) => println!("  {:<24} -> {}", text, value),
            Err(err) => println!("  {:<24} -> error: {}", text, err),
        }
    }

    // Use a preset format for link speeds (three implied decimals)
    let bandwidth = MagnitudeFormat::bandwidth();
    let rate = bandwidth.parse_u64("54 M").unwrap_or_default();
    println!("\nLink speed: {} (stored as {})", bandwidth.format_u64(rate), rate);

    // Collect interface names into a packed array
    let mut interfaces = StrArray::new();
    for name in ["eth0", "wlan0", "lo"] {
        if let Err(err) = interfaces.append(name) {
            println!("cannot store {}: {}", name, err);
        }
    }
    println!(
        "\nInterfaces ({}): {:?}",
        interfaces.count(),
        interfaces.iter().collect::<Vec<_>>()
    );
}
