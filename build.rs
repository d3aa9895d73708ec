use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables DOM_KIT_* desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, solo claves propias de la librería
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !key.starts_with("DOM_KIT_") {
                        continue;
                    }

                    // Lo que ya viene del entorno tiene prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "DOM_KIT_BASE_URL",
        "DOM_KIT_ENABLE_LOGGING",
        "DOM_KIT_LOG_LEVEL",
        "DOM_KIT_DEFAULT_HEADERS",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
