use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Carregar variáveis de ambiente a partir de .env, se existir
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Não sobrescrever variáveis já definidas no ambiente
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=Arquivo .env não encontrado. Usando valores padrão (API_URL etc).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
