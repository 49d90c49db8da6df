//! The ledger store: one flat file of fixed-size records, rewritten in
//! full on every mutation. Strictly single-process — two writers
//! interleaving `store_all` calls will lose updates. Every operation
//! opens its own file handle and closes it before returning.

use crate::codec::{decode, encode, RECORD_LEN};
use crate::data::{Account, AccountNumber, Error};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

pub(crate) struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// The path is the only state; nothing is opened until an operation
    /// runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens a fresh account with a zero balance by appending one record;
    /// the rest of the file is untouched. Account numbers are not checked
    /// for uniqueness: a second account under the same number gets its own
    /// record, and every scan resolves to the first one on file.
    pub fn create_account(&self, name: &str, number: AccountNumber) -> Result<(), Error> {
        let account = Account {
            name: name.to_owned(),
            number,
            balance: 0.0,
        };
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(&encode(&account))?;
        Ok(())
    }

    /// Reads every record, in file order. A missing file is an empty
    /// ledger, not an error.
    pub fn load_all(&self) -> Result<Vec<Account>, Error> {
        match File::open(&self.path) {
            Ok(file) => read_accounts(file),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the whole file with the given accounts, in order. If the
    /// process dies mid-write the file is left truncated; there is no
    /// temp-file-and-rename step.
    pub fn store_all(&self, accounts: &[Account]) -> Result<(), Error> {
        write_accounts(File::create(&self.path)?, accounts)
    }

    /// Adds `amount` to the first matching account and returns the new
    /// balance. The amount is taken as given — nothing here rejects a
    /// negative or zero deposit.
    pub fn deposit(&self, number: AccountNumber, amount: f32) -> Result<f32, Error> {
        let mut accounts = self.load_all()?;
        let account = find_mut(&mut accounts, number)?;
        account.balance += amount;
        let balance = account.balance;
        self.store_all(&accounts)?;
        Ok(balance)
    }

    /// Subtracts `amount` if the balance covers it and returns the new
    /// balance. A refused withdrawal fails before touching the file, so
    /// the ledger stays byte-for-byte intact.
    pub fn withdraw(&self, number: AccountNumber, amount: f32) -> Result<f32, Error> {
        let mut accounts = self.load_all()?;
        let account = find_mut(&mut accounts, number)?;
        if account.balance < amount {
            return Err(Error::InsufficientFunds {
                asked: amount,
                available: account.balance,
            });
        }
        account.balance -= amount;
        let balance = account.balance;
        self.store_all(&accounts)?;
        Ok(balance)
    }

    pub fn balance(&self, number: AccountNumber) -> Result<f32, Error> {
        let accounts = self.load_all()?;
        let account = accounts
            .iter()
            .find(|account| account.number == number)
            .ok_or(Error::AccountNotFound(number))?;
        Ok(account.balance)
    }
}

fn find_mut(accounts: &mut [Account], number: AccountNumber) -> Result<&mut Account, Error> {
    accounts
        .iter_mut()
        .find(|account| account.number == number)
        .ok_or(Error::AccountNotFound(number))
}

/// Reads consecutive fixed-size records until end of stream. A trailing
/// chunk shorter than one record fails the whole read instead of being
/// dropped.
pub(crate) fn read_accounts<R: Read>(mut reader: R) -> Result<Vec<Account>, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let mut accounts = Vec::with_capacity(buf.len() / RECORD_LEN);
    for block in buf.chunks(RECORD_LEN) {
        accounts.push(decode(block)?);
    }
    Ok(accounts)
}

/// Writes every account as one record, in the given order.
pub(crate) fn write_accounts<W: Write>(mut writer: W, accounts: &[Account]) -> Result<(), Error> {
    for account in accounts {
        writer.write_all(&encode(account))?;
    }
    writer.flush()?;
    Ok(())
}
