use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 계정 ID 파싱 실패
/// Account ID parse failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid account ID: {input} (expected shard.realm.number, e.g. 0.0.1234567)")]
pub struct AccountIdParseError {
    pub input: String,
}

// Hedera 계정 ID (shard.realm.number)
// 역할: Solana의 Pubkey 같은 것
// AccountId: typed shard.realm.number ledger address
//
// 모든 외부 인터페이스에서 쓰는 표준 텍스트 형식은 Display가 만드는
// "shard.realm.number" 입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl AccountId {
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdParseError;

    /// 문법 검사: `^\d+\.\d+\.\d+$`
    /// Syntax check: three dot-separated decimal fields, nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || AccountIdParseError {
            input: s.to_string(),
        };

        let mut parts = s.split('.');
        let shard = parts.next().ok_or_else(err)?;
        let realm = parts.next().ok_or_else(err)?;
        let num = parts.next().ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }

        // 빈 필드나 숫자가 아닌 문자 거부 (u64 파싱은 공백/부호도 거부함)
        for part in [shard, realm, num] {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
        }

        Ok(Self {
            shard: shard.parse().map_err(|_| err())?,
            realm: realm.parse().map_err(|_| err())?,
            num: num.parse().map_err(|_| err())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_account_id() {
        let id: AccountId = "0.0.1234567".parse().unwrap();
        assert_eq!(id, AccountId::new(0, 0, 1234567));
        assert_eq!(id.to_string(), "0.0.1234567");
    }

    #[test]
    fn parses_nonzero_shard_and_realm() {
        let id: AccountId = "1.2.3".parse().unwrap();
        assert_eq!(id, AccountId::new(1, 2, 3));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in [
            "", "0.0", "0.0.", "0.0.1.2", "0.0.abc", "0.0.-5", "0.0. 7", "abc", "0..7",
            "0.0.1 ",
        ] {
            assert!(
                input.parse::<AccountId>().is_err(),
                "should reject {:?}",
                input
            );
        }
    }
}
