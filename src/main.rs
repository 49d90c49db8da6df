use anyhow::Context;
use std::io::{self, Write};

use data::AccountNumber;
use store::Ledger;

mod codec;
mod data;
mod export;
mod store;

/// Default ledger file, created in the working directory on first use.
const ACCOUNT_FILE: &str = "account.dat";

fn main() -> Result<(), anyhow::Error> {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.len() {
        1 => ACCOUNT_FILE,
        2 => args[1].as_str(),
        _ => anyhow::bail!("usage: {} [ledger-file]", args[0]),
    };
    let ledger = Ledger::new(path);
    loop {
        println!();
        println!("*** Teller ***");
        println!("1. Create account");
        println!("2. Deposit");
        println!("3. Withdraw");
        println!("4. Check balance");
        println!("5. List accounts");
        println!("6. Quit");
        let Some(choice) = prompt("Choice: ")? else {
            break;
        };
        let result = match choice.as_str() {
            "1" => create_account(&ledger),
            "2" => deposit(&ledger),
            "3" => withdraw(&ledger),
            "4" => check_balance(&ledger),
            "5" => list_accounts(&ledger),
            "6" => break,
            _ => {
                eprintln!("Invalid choice!");
                Ok(())
            }
        };
        // Shell-side reporting only; the store itself never prints.
        if let Err(e) = result {
            eprintln!("Operation failed: {e}");
        }
    }
    Ok(())
}

fn create_account(ledger: &Ledger) -> Result<(), anyhow::Error> {
    let name = ask("Name: ")?;
    let number = ask("Account number: ")?.parse::<AccountNumber>()?;
    ledger.create_account(&name, number)?;
    println!("Account created.");
    Ok(())
}

fn deposit(ledger: &Ledger) -> Result<(), anyhow::Error> {
    let number = ask("Account number: ")?.parse::<AccountNumber>()?;
    let amount = ask("Amount to deposit: ")?.parse::<f32>()?;
    let balance = ledger.deposit(number, amount)?;
    println!("Deposited {amount:.2}; new balance is {balance:.2}");
    Ok(())
}

fn withdraw(ledger: &Ledger) -> Result<(), anyhow::Error> {
    let number = ask("Account number: ")?.parse::<AccountNumber>()?;
    let amount = ask("Amount to withdraw: ")?.parse::<f32>()?;
    let balance = ledger.withdraw(number, amount)?;
    println!("Withdrew {amount:.2}; remaining balance is {balance:.2}");
    Ok(())
}

fn check_balance(ledger: &Ledger) -> Result<(), anyhow::Error> {
    let number = ask("Account number: ")?.parse::<AccountNumber>()?;
    let balance = ledger.balance(number)?;
    println!("Current balance is {balance:.2}");
    Ok(())
}

fn list_accounts(ledger: &Ledger) -> Result<(), anyhow::Error> {
    let accounts = ledger.load_all()?;
    export::list_accounts(io::stdout(), &accounts)
}

/// Reads one trimmed line, `None` on end of input.
fn prompt(message: &str) -> Result<Option<String>, anyhow::Error> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Like `prompt`, but end of input mid-operation is an error.
fn ask(message: &str) -> Result<String, anyhow::Error> {
    prompt(message)?.context("unexpected end of input")
}
