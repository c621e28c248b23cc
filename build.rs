use std::env;
use std::path::Path;

// ffmpeg-sys-next locates the FFmpeg libraries through FFMPEG_DIR or, on
// Windows, through vcpkg. The link step fails with an opaque error when
// neither is set up, so print a hint up front instead.
fn main() {
    for variable in ["FFMPEG_DIR", "VCPKG_ROOT", "VCPKGRS_DYNAMIC", "VCPKGRS_TRIPLET"] {
        println!("cargo:rerun-if-env-changed={variable}");
    }

    let windows = env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows");
    if !windows || env::var_os("FFMPEG_DIR").is_some() {
        return;
    }

    match env::var("VCPKG_ROOT") {
        Ok(root) => hint_about_vcpkg(&root),
        Err(_) => warn(
            "FFMPEG_DIR is not set. On Windows, install the FFmpeg libraries \
             via vcpkg and set VCPKG_ROOT + FFMPEG_DIR so ffmpeg-next can find them.",
        ),
    }
}

fn hint_about_vcpkg(root: &str) {
    let triplet = env::var("VCPKGRS_TRIPLET").unwrap_or_else(|_| "x64-windows".into());
    let install = Path::new(root).join("installed").join(&triplet);

    if !install.exists() {
        warn(&format!(
            "VCPKG_ROOT is set but no FFmpeg install was found at {}.",
            install.display(),
        ));
        return;
    }

    warn(&format!(
        "Found a vcpkg FFmpeg install at {}. Set FFMPEG_DIR to that directory to make discovery explicit.",
        install.display(),
    ));
    if env::var_os("VCPKGRS_DYNAMIC").is_none() {
        warn("Consider setting VCPKGRS_DYNAMIC=1 when linking against vcpkg's dynamic FFmpeg builds.");
    }
}

fn warn(message: &str) {
    println!("cargo:warning={message}");
}
