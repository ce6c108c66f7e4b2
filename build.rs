/// build.rs: Skiff build script.
///
/// On Windows targets: embeds assets/icon.ico into the compiled executable so
/// the titlebar, taskbar and Explorer show the Skiff icon without any runtime
/// loading.
///
/// Uses CARGO_CFG_TARGET_OS rather than cfg!(target_os) so cross-compilation
/// picks the target, not the host.
///
/// On non-Windows targets this script is a no-op (the icon is set at runtime
/// via eframe's NativeOptions viewport builder instead).
fn main() {
    println!("cargo:rerun-if-changed=assets/icon.ico");
    println!("cargo:rerun-if-changed=assets/icon.png");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");
        res.compile()
            .expect("Failed to compile Windows resources (winres). \
                     Ensure a C compiler (MSVC or MinGW) is available.");
    }
}
