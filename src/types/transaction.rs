//! Transaction input types and the fixed category enumerations.
//!
//! The enumeration declaration order below is the one-hot column order the
//! models were trained on. Reordering a variant silently corrupts every
//! prediction, so these lists must stay in sync with the training pipeline.

/// Transaction type, in training column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    CashOut,
    Transfer,
    Payment,
    CashIn,
    Debit,
}

impl TransactionType {
    /// Labels in one-hot column order.
    pub const CATEGORIES: [&'static str; 5] =
        ["CASH_OUT", "TRANSFER", "PAYMENT", "CASH_IN", "DEBIT"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CASH_OUT" => Some(Self::CashOut),
            "TRANSFER" => Some(Self::Transfer),
            "PAYMENT" => Some(Self::Payment),
            "CASH_IN" => Some(Self::CashIn),
            "DEBIT" => Some(Self::Debit),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::CashOut => "CASH_OUT",
            Self::Transfer => "TRANSFER",
            Self::Payment => "PAYMENT",
            Self::CashIn => "CASH_IN",
            Self::Debit => "DEBIT",
        }
    }
}

/// Sender/receiver pair code (customer-to-customer or customer-to-merchant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionPair {
    Cc,
    Cm,
}

impl TransactionPair {
    /// Labels in one-hot column order.
    pub const CATEGORIES: [&'static str; 2] = ["cc", "cm"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "cc" => Some(Self::Cc),
            "cm" => Some(Self::Cm),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Cc => "cc",
            Self::Cm => "cm",
        }
    }
}

/// Part of the day the transaction occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PartOfDay {
    /// Labels in one-hot column order.
    pub const CATEGORIES: [&'static str; 4] = ["morning", "afternoon", "evening", "night"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "evening" => Some(Self::Evening),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// A transaction that has passed input validation.
///
/// Categorical fields are typed enums, so an out-of-vocabulary value
/// cannot reach feature assembly.
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    /// Transaction amount, strictly positive.
    pub amount: f64,
    /// Day of month, 1 through 31.
    pub day: i64,
    pub transaction_type: TransactionType,
    pub pair_code: TransactionPair,
    pub part_of_the_day: PartOfDay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for label in TransactionType::CATEGORIES {
            assert_eq!(TransactionType::from_label(label).unwrap().as_label(), label);
        }
        for label in TransactionPair::CATEGORIES {
            assert_eq!(TransactionPair::from_label(label).unwrap().as_label(), label);
        }
        for label in PartOfDay::CATEGORIES {
            assert_eq!(PartOfDay::from_label(label).unwrap().as_label(), label);
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert!(TransactionType::from_label("cash_out").is_none());
        assert!(TransactionPair::from_label("CC").is_none());
        assert!(PartOfDay::from_label("noon").is_none());
    }
}
