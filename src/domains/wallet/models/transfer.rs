use rust_decimal::Decimal;

use crate::domains::wallet::models::AccountId;

/// 기본 전송 메모
/// Default transfer memo
pub const DEFAULT_MEMO: &str = "Tip via TipHBAR";

/// 전송 지시의 한쪽 (양수 = 입금, 음수 = 출금)
/// One leg of a transfer instruction (positive = credit, negative = debit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLeg {
    pub account_id: AccountId,
    pub amount: Decimal,
}

// HBAR 전송 지시
// 역할: 익스텐션이 서명/제출할 트랜잭션의 내용
// TransferInstruction: what the wallet extension signs and submits
//
// 불변식: 모든 leg의 합은 0 (equal-and-opposite)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInstruction {
    pub legs: Vec<TransferLeg>,
    pub memo: String,
}

impl TransferInstruction {
    /// 팁 전송 지시 생성: from에서 차감, to로 입금, 메모 첨부
    /// Build a tip transfer: debit `from`, credit `to`, attach memo
    pub fn tip(from: AccountId, to: AccountId, amount: Decimal, memo: Option<&str>) -> Self {
        Self {
            legs: vec![
                TransferLeg {
                    account_id: from,
                    amount: -amount,
                },
                TransferLeg {
                    account_id: to,
                    amount,
                },
            ],
            memo: memo.unwrap_or(DEFAULT_MEMO).to_string(),
        }
    }

    /// 전송 지시가 균형 잡혀 있는지 확인 (합계 0)
    /// Whether the instruction is balanced (legs sum to zero)
    pub fn is_balanced(&self) -> bool {
        self.legs
            .iter()
            .fold(Decimal::ZERO, |acc, leg| acc + leg.amount)
            .is_zero()
    }
}

/// 제출 성공 결과 (네트워크가 부여한 트랜잭션 ID)
/// Successful submission result (network-assigned transaction ID)
#[derive(Debug, Clone)]
pub struct TransactionResult {
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(num: u64) -> AccountId {
        AccountId::new(0, 0, num)
    }

    #[test]
    fn tip_instruction_is_balanced() {
        let instruction =
            TransferInstruction::tip(account(1001), account(2002), Decimal::new(5, 0), None);

        assert!(instruction.is_balanced());
        assert_eq!(instruction.legs.len(), 2);
        assert_eq!(instruction.legs[0].amount, Decimal::new(-5, 0));
        assert_eq!(instruction.legs[1].amount, Decimal::new(5, 0));
        assert_eq!(instruction.memo, DEFAULT_MEMO);
    }

    #[test]
    fn tip_instruction_keeps_custom_memo() {
        let instruction = TransferInstruction::tip(
            account(1001),
            account(2002),
            Decimal::new(25, 1),
            Some("thanks"),
        );

        assert_eq!(instruction.memo, "thanks");
        assert!(instruction.is_balanced());
    }
}
