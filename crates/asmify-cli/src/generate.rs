use std::fs;

use asmify_codegen::generate;
use asmify_model::ModuleDef;

use crate::cli::GenerateParams;

pub fn run(params: GenerateParams) {
    let json = match fs::read_to_string(&params.module_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", params.module_path.display(), e);
            std::process::exit(1);
        }
    };

    let module = match ModuleDef::from_json(&json) {
        Ok(module) => module,
        Err(e) => {
            eprintln!("error: invalid module description: {}", e);
            std::process::exit(1);
        }
    };

    let script = match generate(&module) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match params.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, script) {
                eprintln!("error: cannot write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", script),
    }
}
