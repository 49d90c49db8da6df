//! Fixed-width record layout: 50 bytes of zero-padded UTF-8 name, then
//! the account number as a little-endian `i32`, then the balance as a
//! little-endian IEEE-754 `f32`. Field widths and order are the whole
//! contract between this module and the store — there is no header,
//! checksum, or magic number, so any disagreement turns the file into
//! garbage without warning.

use crate::data::{Account, AccountNumber, MalformedRecord};

pub const NAME_LEN: usize = 50;
pub const RECORD_LEN: usize = NAME_LEN + 4 + 4;

/// Serializes one account into one record. Never fails: a name longer
/// than 50 bytes is silently cut at the longest character boundary that
/// fits, so a multi-byte character straddling byte 50 is dropped whole
/// and the name field always holds valid UTF-8. Shorter names are
/// right-padded with zero bytes.
pub(crate) fn encode(account: &Account) -> [u8; RECORD_LEN] {
    let mut cut = account.name.len().min(NAME_LEN);
    while !account.name.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut block = [0u8; RECORD_LEN];
    block[..cut].copy_from_slice(&account.name.as_bytes()[..cut]);
    block[NAME_LEN..NAME_LEN + 4].copy_from_slice(&account.number.to_le_bytes());
    block[NAME_LEN + 4..].copy_from_slice(&account.balance.to_le_bytes());
    block
}

/// Deserializes one record. Trailing zero bytes in the name field are
/// padding and are stripped before UTF-8 decoding — a name that really
/// ends in NULs loses them here, the format can't tell the difference.
/// `InvalidName` is only reachable for files written by a foreign
/// encoder, since `encode` never splits a character.
pub(crate) fn decode(block: &[u8]) -> Result<Account, MalformedRecord> {
    if block.len() != RECORD_LEN {
        return Err(MalformedRecord::Truncated(block.len()));
    }
    let name_field = &block[..NAME_LEN];
    let end = name_field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let name = std::str::from_utf8(&name_field[..end])
        .map_err(|_| MalformedRecord::InvalidName)?
        .to_owned();
    let mut quad = [0u8; 4];
    quad.copy_from_slice(&block[NAME_LEN..NAME_LEN + 4]);
    let number = AccountNumber::from_le_bytes(quad);
    quad.copy_from_slice(&block[NAME_LEN + 4..]);
    let balance = f32::from_le_bytes(quad);
    Ok(Account {
        name,
        number,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, NAME_LEN, RECORD_LEN};
    use crate::data::{Account, MalformedRecord};

    fn account(name: &str, number: i32, balance: f32) -> Account {
        Account {
            name: name.to_owned(),
            number,
            balance,
        }
    }

    #[test]
    fn round_trip() {
        let alice = account("Alice", 1001, 12.25);
        assert_eq!(decode(&encode(&alice)).unwrap(), alice);
        let jose = account("José Ñandú", -42, -0.5);
        assert_eq!(decode(&encode(&jose)).unwrap(), jose);
    }

    #[test]
    fn round_trip_empty_name() {
        let anon = account("", 7, 0.0);
        assert_eq!(decode(&encode(&anon)).unwrap(), anon);
    }

    #[test]
    fn layout_is_pinned() {
        assert_eq!(RECORD_LEN, 58);
        let block = encode(&account("Bob", 0x0102_0304, 1.5));
        assert_eq!(&block[..3], b"Bob");
        assert!(block[3..NAME_LEN].iter().all(|&b| b == 0));
        assert_eq!(block[NAME_LEN..NAME_LEN + 4], [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(block[NAME_LEN + 4..], 1.5f32.to_le_bytes());
    }

    #[test]
    fn long_name_is_cut_to_50_bytes() {
        let block = encode(&account(&"a".repeat(60), 1, 0.0));
        assert_eq!(decode(&block).unwrap().name, "a".repeat(50));
    }

    #[test]
    fn exactly_50_byte_name_survives() {
        let name = "b".repeat(50);
        assert_eq!(decode(&encode(&account(&name, 1, 0.0))).unwrap().name, name);
    }

    #[test]
    fn truncation_never_splits_a_character() {
        // 49 ASCII bytes then a two-byte 'é': byte 50 falls in the middle
        // of the 'é', so the whole character is dropped.
        let name = format!("{}é", "a".repeat(49));
        let decoded = decode(&encode(&account(&name, 1, 0.0))).unwrap();
        assert_eq!(decoded.name, "a".repeat(49));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(decode(&[0; 57]), Err(MalformedRecord::Truncated(57)));
        assert_eq!(decode(&[0; 59]), Err(MalformedRecord::Truncated(59)));
        assert_eq!(decode(&[]), Err(MalformedRecord::Truncated(0)));
    }

    #[test]
    fn invalid_name_bytes_are_rejected() {
        let mut block = encode(&account("Mallory", 1, 0.0));
        block[0] = 0xFF;
        assert_eq!(decode(&block), Err(MalformedRecord::InvalidName));
    }
}
