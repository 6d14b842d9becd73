fn main() {
    // cfg.toml が無い場合は #[default] の値でビルドされる
    if !std::path::Path::new("cfg.toml").exists() {
        println!("cargo:warning=cfg.toml not found, using default camera tuning (see cfg.toml.example)");
    }
    println!("cargo:rerun-if-changed=cfg.toml");

    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();
}
