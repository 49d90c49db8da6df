use crate::data::Account;

/// Basic CSV exporter for the account listing.
pub(crate) fn list_accounts<W: std::io::Write>(
    writer: W,
    accounts: &[Account],
) -> Result<(), anyhow::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for account in accounts {
        wtr.serialize(account)?;
    }
    wtr.flush()?;
    Ok(())
}
