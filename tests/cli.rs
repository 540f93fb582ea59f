use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn otp_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_otp"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(otp_command().args(args).output()?)
}

#[test]
fn cli_encrypt_then_decrypt() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    let recovered = dir.path().join("recovered.txt");

    fs::write(&plain, "Meet me by the old Oak tree\n")?;

    let encrypt = run(&[
        "-e",
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert!(
        encrypt.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );
    assert!(String::from_utf8(encrypt.stdout)?.contains("Encrypted 27 symbols"));

    let key_text = fs::read_to_string(&keys)?;
    assert_eq!(key_text.split_whitespace().count(), 27);

    let decrypt = run(&[
        "-d",
        cipher.to_str().unwrap(),
        recovered.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert!(
        decrypt.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&decrypt.stderr)
    );

    assert_eq!(fs::read(&recovered)?, fs::read(&plain)?);
    Ok(())
}

#[test]
fn cli_seeded_generator_is_deterministic() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    fs::write(&plain, "same text\n")?;

    let mut ciphertexts = Vec::new();
    for name in ["one", "two"] {
        let cipher = dir.path().join(format!("{name}.txt"));
        let keys = dir.path().join(format!("{name}.keys"));
        let out = run(&[
            "-e",
            plain.to_str().unwrap(),
            cipher.to_str().unwrap(),
            keys.to_str().unwrap(),
            "--rng",
            "seeded",
            "--seed",
            "99",
        ])?;
        assert!(out.status.success());
        ciphertexts.push(fs::read(&cipher)?);
    }
    assert_eq!(ciphertexts[0], ciphertexts[1]);
    Ok(())
}

#[test]
fn cli_seeded_without_seed_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    fs::write(&plain, "abc\n")?;

    let out = run(&[
        "-e",
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
        keys.to_str().unwrap(),
        "--rng",
        "seeded",
    ])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Seed required"));
    assert!(!cipher.exists());
    Ok(())
}

#[test]
fn cli_rejects_unsupported_symbols_without_writing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    fs::write(&plain, "Hello, World\n")?;

    let out = run(&[
        "-e",
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unsupported symbol ','"), "stderr: {stderr}");
    assert!(stderr.contains("index 5"), "stderr: {stderr}");
    assert!(!cipher.exists());
    assert!(!keys.exists());
    Ok(())
}

#[test]
fn cli_short_key_file_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    let out_path = dir.path().join("plain.txt");
    fs::write(&cipher, "abc\n")?;
    fs::write(&keys, "1 2 \n")?;

    let out = run(&[
        "-d",
        cipher.to_str().unwrap(),
        out_path.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Key length mismatch"));
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn cli_empty_input_reports_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    fs::write(&plain, "")?;

    let out = run(&[
        "-e",
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Empty input"));
    Ok(())
}

#[test]
fn cli_wrong_argument_count_is_an_error() -> Result<(), Box<dyn Error>> {
    let out = run(&["-e", "only-one.txt"])?;
    assert!(!out.status.success());

    let out = run(&[])?;
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));

    let out = run(&["a.txt", "b.txt", "c.txt"])?;
    assert_eq!(out.status.code(), Some(2));
    Ok(())
}

#[test]
fn cli_unknown_option_is_an_error() -> Result<(), Box<dyn Error>> {
    let out = run(&["-x", "a.txt", "b.txt", "c.txt"])?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn cli_check_reports_status() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.txt");
    let keys = dir.path().join("keys.txt");
    fs::write(&good, "ab\n")?;
    fs::write(&bad, "a-b\n")?;
    fs::write(&keys, "4 9\n")?;

    let out = run(&["check", good.to_str().unwrap(), keys.to_str().unwrap()])?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.contains("Status: OK"));

    let out = run(&["check", bad.to_str().unwrap()])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stdout)?.contains("Status: INVALID"));

    let out = run(&["check", "--json", bad.to_str().unwrap()])?;
    let value: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["unsupported"]["symbol"], "-");
    assert_eq!(value["unsupported"]["index"], 1);
    Ok(())
}

#[test]
fn cli_warns_about_ignored_generator_options() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let keys = dir.path().join("keys.txt");
    let recovered = dir.path().join("recovered.txt");
    fs::write(&plain, "abc\n")?;

    let out = run(&[
        "-e",
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
        keys.to_str().unwrap(),
        "--seed",
        "3",
    ])?;
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--seed is ignored"));

    let out = run(&[
        "-d",
        cipher.to_str().unwrap(),
        recovered.to_str().unwrap(),
        keys.to_str().unwrap(),
        "--rng",
        "thread",
    ])?;
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ignored when decrypting"));
    assert_eq!(fs::read(&recovered)?, fs::read(&plain)?);
    Ok(())
}

#[test]
fn cli_unwritable_key_path_keeps_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plan.txt");
    let keys = dir.path().join("keys");
    fs::write(&plain, "secret plan\n")?;
    fs::create_dir(&keys)?;

    let out = run(&[
        "-e",
        plain.to_str().unwrap(),
        plain.to_str().unwrap(),
        keys.to_str().unwrap(),
    ])?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&plain)?, "secret plan\n");
    Ok(())
}

#[test]
fn cli_check_reports_undecodable_text() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let text = dir.path().join("cipher.txt");
    fs::write(&text, b"a\xffb\n")?;

    let out = run(&["check", text.to_str().unwrap()])?;
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("not valid UTF-8"));
    assert!(stdout.contains("Status: INVALID"));
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let out = run(&["--version"])?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(
        stdout.starts_with(&format!("otp {} (", env!("CARGO_PKG_VERSION"))),
        "unexpected version line: {stdout}"
    );
    assert!(stdout.contains("build, git "));
    Ok(())
}
