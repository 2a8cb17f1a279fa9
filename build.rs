fn main() {
    let out_dir = std::env::var_os("OUT_DIR").unwrap();
    let dest_path = std::path::Path::new(&out_dir).join("gf_tables.rs");

    let mut src = String::new();

    let mut exp = [0_u8; 256];
    let mut log = [0_u8; 256];

    // ------------------- exponent LUT generation -------------------
    // x^8 = x^4 + x^3 + x^2 + 1, unrolled into the table recurrence
    for i in 0..256 {
        exp[i] = if i < 8 {
            1 << i
        } else {
            exp[i - 4] ^ exp[i - 5] ^ exp[i - 6] ^ exp[i - 8]
        };
    }

    src.push_str("static EXP:[u8;256]=[");
    for e in exp.iter() {
        src.push_str(&e.to_string());
        src.push(',');
    }
    src.push_str("];");

    // ------------------- logarithm LUT generation -------------------
    // NOTE: LOG[0] is meaningless and must never be read
    for (i, e) in exp.iter().enumerate().take(255) {
        log[*e as usize] = i as u8;
    }

    src.push_str("static LOG:[u8;256]=[");
    for l in log.iter() {
        src.push_str(&l.to_string());
        src.push(',');
    }
    src.push_str("];");

    std::fs::write(&dest_path, src).unwrap();
    println!("cargo::rerun-if-changed=build.rs");
}
