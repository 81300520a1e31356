use std::io::{self, BufRead, Write};

use calcore::{Calculator, Constant, UnaryFunction};

/// Line-oriented front end over the calculator engine. Each line is one key
/// press: `=`, `ac`, `del`, `pi`, `e`, a unary function name (`sin`, `sqrt`,
/// `fact`, ...), or literal text to append to the input.
fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut calc = Calculator::new();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let key = line.trim();

        match key {
            "" => {}
            "quit" | "exit" => break,
            "=" => {
                let result = calc.equals();
                println!("{result}");
            }
            "ac" => calc.clear(),
            "del" => calc.delete_last(),
            "pi" => calc.push_constant(Constant::Pi),
            "e" => calc.push_constant(Constant::E),
            _ => match key.parse::<UnaryFunction>() {
                Ok(function) => {
                    let result = calc.apply(function);
                    println!("{result}");
                }
                Err(_) => calc.append(key),
            },
        }

        print!("[{}]> ", calc.display());
        stdout.flush()?;
    }

    Ok(())
}
