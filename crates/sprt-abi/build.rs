use sprt_core::Capability;
use sprt_core::Target;

fn main() {
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    let names: Vec<String> = Capability::ALL
        .iter()
        .map(|cap| format!("\"{}\"", cap.cfg_name()))
        .collect();
    println!("cargo::rustc-check-cfg=cfg(sprt_have, values({}))", names.join(", "));

    let target = match Target::from_cfg(&os, &arch) {
        Ok(target) => target,
        Err(err) => panic!("sprt-abi cannot be built for {os}/{arch}: {err}"),
    };

    for cap in Capability::ALL {
        if target.has(cap) {
            println!("cargo::rustc-cfg=sprt_have=\"{}\"", cap.cfg_name());
        }
    }
    println!("cargo::rerun-if-changed=build.rs");
}
