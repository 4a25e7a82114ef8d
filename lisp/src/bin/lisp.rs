use lisp::{global_env, run};

fn main() -> Result<(), String> {
    let env = global_env();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match run(&input, &env) {
            Err(e) => println!("{}", e),
            Ok(value) => println!("{}", value),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match run(&line, &env) {
                    Err(e) => println!("{}", e),
                    Ok(value) => println!("{}", value),
                }
            }
        }
    }
}
