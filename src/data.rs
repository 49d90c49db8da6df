use serde::Serialize;
use thiserror::Error;

pub type AccountNumber = i32;

/// This is our `Account` structure we work with. The balance is an `f32`
/// because that's exactly the width the on-disk record reserves for it;
/// rounding to two decimals is a display concern and happens at
/// serialization time, not here.
/// See `AccountRow` for details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "AccountRow")]
pub(crate) struct Account {
    pub name: String,
    pub number: AccountNumber,
    pub balance: f32,
}

/// This is our proxy for serializing `Account`: it renders the balance
/// with two decimal places just before serialization, so CSV listings
/// always show amounts the way the shell displays them.
#[derive(Serialize)]
pub(crate) struct AccountRow {
    pub name: String,
    pub number: AccountNumber,
    pub balance: String,
}

impl From<Account> for AccountRow {
    fn from(account: Account) -> Self {
        Self {
            name: account.name,
            number: account.number,
            balance: format!("{:.2}", account.balance),
        }
    }
}

/// Operation error handling; every failure is returned to the caller as a
/// typed result for it to display, the core never prints or exits on its
/// own.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Account number {0} not found")]
    AccountNotFound(AccountNumber),
    #[error("Insufficient funds for operation (asked {asked:.2} while {available:.2} available)")]
    InsufficientFunds { asked: f32, available: f32 },
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),
    #[error("Ledger file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A record (or a whole file) that can't be what our encoder produced.
/// The format carries no checksum or magic number, so these two checks
/// are the only corruption detection there is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("Truncated record: got {0} bytes, records are 58 bytes")]
    Truncated(usize),
    #[error("Record name field is not valid UTF-8")]
    InvalidName,
}
