use mpl_token_metadata::types::{Collection, Creator, DataV2, Uses};

use crate::errors::TokenClientError;

/// On-chain field limits of the token-metadata program.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
/// 100% in basis points.
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

/// Business fields of a metadata account.
///
/// Constructed once with every optional field defaulted, validated locally,
/// then converted into the wire payload. Malformed input is rejected before
/// any network call is attempted.
///
/// # Example
/// ```ignore
/// let args = MetadataArgs {
///     name: "LEO".to_string(),
///     symbol: "TST".to_string(),
///     uri: "https://arweave.net/euAlBrhc3NQJ5Q-oJnP10vsQFjTV7E9CgHZcVm8cogo".to_string(),
///     seller_fee_basis_points: 1000,
///     creators: vec![Creator { address, verified: true, share: 100 }],
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct MetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub is_mutable: bool,
}

impl Default for MetadataArgs {
    fn default() -> Self {
        MetadataArgs {
            name: String::new(),
            symbol: String::new(),
            uri: String::new(),
            seller_fee_basis_points: 0,
            creators: Vec::new(),
            collection: None,
            uses: None,
            is_mutable: true,
        }
    }
}

impl MetadataArgs {
    pub fn validate(&self) -> Result<(), TokenClientError> {
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(TokenClientError::FieldTooLong {
                field: "name",
                max: MAX_NAME_LENGTH,
            });
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(TokenClientError::FieldTooLong {
                field: "symbol",
                max: MAX_SYMBOL_LENGTH,
            });
        }
        if self.uri.len() > MAX_URI_LENGTH {
            return Err(TokenClientError::FieldTooLong {
                field: "uri",
                max: MAX_URI_LENGTH,
            });
        }
        if self.seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
            return Err(TokenClientError::FeeBasisPointsOutOfRange(
                self.seller_fee_basis_points,
            ));
        }
        if !self.creators.is_empty() {
            let sum: u32 = self.creators.iter().map(|c| u32::from(c.share)).sum();
            if sum != 100 {
                return Err(TokenClientError::CreatorShareSum(sum));
            }
        }
        Ok(())
    }

    /// Validate and convert into the payload consumed by instruction
    /// building. An empty creator list becomes `None` on the wire.
    pub fn into_data_v2(self) -> Result<DataV2, TokenClientError> {
        self.validate()?;
        Ok(DataV2 {
            name: self.name,
            symbol: self.symbol,
            uri: self.uri,
            seller_fee_basis_points: self.seller_fee_basis_points,
            creators: if self.creators.is_empty() {
                None
            } else {
                Some(self.creators)
            },
            collection: self.collection,
            uses: self.uses,
        })
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    fn creator(share: u8) -> Creator {
        Creator {
            address: Pubkey::new_unique(),
            verified: false,
            share,
        }
    }

    fn valid_args() -> MetadataArgs {
        MetadataArgs {
            name: "Generug".to_string(),
            symbol: "RUG".to_string(),
            uri: "https://arweave.net/abc".to_string(),
            seller_fee_basis_points: 500,
            creators: vec![creator(100)],
            ..Default::default()
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(valid_args().validate().is_ok());
    }

    #[test]
    fn accepts_empty_creator_list() {
        let args = MetadataArgs {
            creators: Vec::new(),
            ..valid_args()
        };
        let data = args.into_data_v2().unwrap();
        assert!(data.creators.is_none());
    }

    #[test]
    fn rejects_creator_shares_not_summing_to_100() {
        let args = MetadataArgs {
            creators: vec![creator(50), creator(49)],
            ..valid_args()
        };
        assert!(matches!(
            args.validate(),
            Err(TokenClientError::CreatorShareSum(99))
        ));
    }

    #[test]
    fn accepts_split_shares_summing_to_100() {
        let args = MetadataArgs {
            creators: vec![creator(60), creator(40)],
            ..valid_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_seller_fee_above_10000() {
        let args = MetadataArgs {
            seller_fee_basis_points: 10_001,
            ..valid_args()
        };
        assert!(matches!(
            args.validate(),
            Err(TokenClientError::FeeBasisPointsOutOfRange(10_001))
        ));
    }

    #[test]
    fn accepts_seller_fee_at_the_bound() {
        let args = MetadataArgs {
            seller_fee_basis_points: 10_000,
            ..valid_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_overlong_name() {
        let args = MetadataArgs {
            name: "x".repeat(MAX_NAME_LENGTH + 1),
            ..valid_args()
        };
        assert!(matches!(
            args.validate(),
            Err(TokenClientError::FieldTooLong { field: "name", .. })
        ));
    }

    #[test]
    fn data_v2_preserves_fields() {
        let args = valid_args();
        let creators = args.creators.clone();
        let data = args.into_data_v2().unwrap();
        assert_eq!(data.name, "Generug");
        assert_eq!(data.symbol, "RUG");
        assert_eq!(data.seller_fee_basis_points, 500);
        assert_eq!(data.creators, Some(creators));
    }
}
