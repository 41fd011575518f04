use std::path::Path;

use bytesize::ByteSize;

pub fn show_success(output: &Path, size: u64) {
    println!("✓ Decrypted: {} ({})", output.display(), ByteSize::b(size));
}

pub fn show_input(input: &Path, size: u64) {
    println!("{} ({})", input.display(), ByteSize::b(size));
}
