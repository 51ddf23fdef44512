use bank_core::{
    AccountId, Bank, DepositOperation, EngineError, InterestAccrualOperation, Notice, Operation,
    OperationStatus, User, WithdrawalOperation,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bank_with_account() -> (Bank, AccountId) {
    let mut bank = Bank::new();
    let account = bank.open_account(User::new("alice").unwrap());
    (bank, account)
}

#[test]
fn deposit_withdraw_undo_scenario() {
    let (mut bank, account) = bank_with_account();

    let mut deposit = DepositOperation::new(&bank, account, dec!(100)).unwrap();
    assert!(deposit.execute(&mut bank));
    assert_eq!(bank.account(account).unwrap().balance(), dec!(100));
    assert_eq!(bank.account(account).unwrap().history_len(), 1);

    let mut overdraw = WithdrawalOperation::new(&bank, account, dec!(150)).unwrap();
    assert!(!overdraw.execute(&mut bank));
    assert_eq!(overdraw.status(), OperationStatus::Failed);
    assert_eq!(bank.account(account).unwrap().balance(), dec!(100));
    assert_eq!(bank.account(account).unwrap().history_len(), 1);

    let mut withdrawal = WithdrawalOperation::new(&bank, account, dec!(40)).unwrap();
    assert!(withdrawal.execute(&mut bank));
    assert_eq!(bank.account(account).unwrap().balance(), dec!(60));
    assert_eq!(bank.account(account).unwrap().history_len(), 2);

    assert!(deposit.undo(&mut bank));
    assert_eq!(bank.account(account).unwrap().balance(), dec!(-40));
    assert_eq!(bank.account(account).unwrap().history_len(), 2);
    assert_eq!(
        bank.notices(),
        &[Notice::NegativeBalance {
            account,
            operation: deposit.id(),
            balance: dec!(-40),
        }]
    );
    assert_eq!(
        bank.account(account).unwrap().history(),
        vec![
            format!("{}: DepositOperation", deposit.id()),
            format!("{}: WithdrawalOperation", withdrawal.id()),
        ]
    );

    assert_eq!(bank.take_notices().len(), 1);
    assert!(bank.notices().is_empty());
}

#[test]
fn operation_ids_are_shared_across_kinds() {
    let (mut bank, account) = bank_with_account();
    let deposit = DepositOperation::new(&bank, account, dec!(1)).unwrap();
    let withdrawal = WithdrawalOperation::new(&bank, account, dec!(1)).unwrap();
    let interest = InterestAccrualOperation::new(&bank, account, dec!(0.1)).unwrap();
    let other = bank.open_account(User::new("bob").unwrap());
    let later = DepositOperation::new(&bank, other, dec!(1)).unwrap();

    assert!(deposit.id() < withdrawal.id());
    assert!(withdrawal.id() < interest.id());
    assert!(interest.id() < later.id());
    assert!(account < other);
}

#[test]
fn failed_withdrawal_still_consumes_an_id() {
    let (mut bank, account) = bank_with_account();
    let mut failed = WithdrawalOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(!failed.execute(&mut bank));

    let next = DepositOperation::new(&bank, account, dec!(1)).unwrap();
    assert_eq!(next.id().get(), failed.id().get() + 1);
}

#[test]
fn rejected_construction_consumes_no_id() {
    let (bank, account) = bank_with_account();
    let before = bank.next_operation_id_hint();

    let foreign = AccountId::new(99);
    assert!(matches!(
        DepositOperation::new(&bank, foreign, dec!(1)),
        Err(EngineError::InvalidAccount(_))
    ));
    assert!(matches!(
        WithdrawalOperation::new(&bank, foreign, dec!(1)),
        Err(EngineError::InvalidAccount(_))
    ));
    assert!(matches!(
        InterestAccrualOperation::new(&bank, foreign, dec!(0.1)),
        Err(EngineError::InvalidAccount(_))
    ));
    assert!(matches!(
        WithdrawalOperation::new(&bank, account, dec!(-5)),
        Err(EngineError::InvalidAmount(_))
    ));

    assert_eq!(bank.next_operation_id_hint(), before);
}

#[test]
fn heterogeneous_operations_share_the_contract() {
    let (mut bank, account) = bank_with_account();
    let mut operations: Vec<Box<dyn Operation>> = vec![
        Box::new(DepositOperation::with_content(&bank, account, dec!(50), "salary").unwrap()),
        Box::new(WithdrawalOperation::with_content(&bank, account, dec!(20), "rent").unwrap()),
    ];

    for operation in &mut operations {
        assert!(operation.execute(&mut bank));
    }
    assert_eq!(bank.account(account).unwrap().balance(), dec!(30));

    for operation in operations.iter_mut().rev() {
        assert!(operation.undo(&mut bank));
    }
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::ZERO);
    assert_eq!(operations[0].content(), "salary");
    assert_eq!(operations[1].content(), "rent");
    assert!(bank.notices().is_empty());
}

#[test]
fn account_display_summarises_state() {
    let (mut bank, account) = bank_with_account();
    let mut deposit = DepositOperation::new(&bank, account, dec!(12.5)).unwrap();
    assert!(deposit.execute(&mut bank));

    assert_eq!(
        bank.account(account).unwrap().to_string(),
        format!("Id: {account}, Balance: 12.5, Owner: \"alice\"")
    );
}

#[test]
fn overflowing_balance_refuses_deposit_and_its_undo() {
    let (mut bank, account) = bank_with_account();
    let mut big = DepositOperation::new(&bank, account, Decimal::MAX).unwrap();
    assert!(big.execute(&mut bank));

    let mut one_more = DepositOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(!one_more.execute(&mut bank));
    assert_eq!(one_more.status(), OperationStatus::Initialized);
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MAX);
    assert_eq!(bank.account(account).unwrap().history_len(), 1);

    let mut drain = WithdrawalOperation::new(&bank, account, Decimal::MAX).unwrap();
    assert!(drain.execute(&mut bank));
    let mut small = DepositOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(small.execute(&mut bank));
    let mut small_out = WithdrawalOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(small_out.execute(&mut bank));

    assert!(big.undo(&mut bank));
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MIN);

    assert!(!small.undo(&mut bank));
    assert_eq!(small.status(), OperationStatus::Done);
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MIN);
    assert_eq!(bank.notices().len(), 1);
}

#[test]
fn overflowing_balance_refuses_withdrawal_paths() {
    let (mut bank, account) = bank_with_account();
    let mut big = DepositOperation::new(&bank, account, Decimal::MAX).unwrap();
    assert!(big.execute(&mut bank));
    let mut drain = WithdrawalOperation::new(&bank, account, Decimal::MAX).unwrap();
    assert!(drain.execute(&mut bank));
    assert!(big.undo(&mut bank));
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MIN);

    // A balance at the lower bound still fails the guard cleanly.
    let mut one = WithdrawalOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(!one.execute(&mut bank));
    assert_eq!(one.status(), OperationStatus::Failed);
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MIN);

    let (mut bank, account) = bank_with_account();
    let mut full = DepositOperation::new(&bank, account, Decimal::MAX).unwrap();
    assert!(full.execute(&mut bank));
    let mut out = WithdrawalOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(out.execute(&mut bank));
    let mut refill = DepositOperation::new(&bank, account, dec!(1)).unwrap();
    assert!(refill.execute(&mut bank));

    assert!(!out.undo(&mut bank));
    assert_eq!(out.status(), OperationStatus::Done);
    assert_eq!(bank.account(account).unwrap().balance(), Decimal::MAX);
}

#[test]
fn operations_do_not_run_against_another_bank() {
    let (mut home, home_account) = bank_with_account();
    let (mut other, other_account) = bank_with_account();
    assert_eq!(home_account, other_account);

    let mut deposit = DepositOperation::new(&home, home_account, dec!(100)).unwrap();
    assert!(!deposit.execute(&mut other));
    assert_eq!(deposit.status(), OperationStatus::Initialized);
    assert_eq!(other.account(other_account).unwrap().balance(), Decimal::ZERO);
    assert!(other.account(other_account).unwrap().history().is_empty());

    assert!(deposit.execute(&mut home));
    assert!(!deposit.undo(&mut other));
    assert_eq!(deposit.status(), OperationStatus::Done);

    let mut seed = DepositOperation::new(&other, other_account, dec!(50)).unwrap();
    assert!(seed.execute(&mut other));
    let mut withdrawal = WithdrawalOperation::new(&home, home_account, dec!(10)).unwrap();
    assert!(!withdrawal.execute(&mut other));
    assert_eq!(withdrawal.status(), OperationStatus::Initialized);
    assert_eq!(other.account(other_account).unwrap().balance(), dec!(50));

    let mut interest = InterestAccrualOperation::new(&home, home_account, dec!(0.1)).unwrap();
    assert!(!interest.execute(&mut other));
    assert_eq!(other.account(other_account).unwrap().history_len(), 1);

    assert_eq!(home.account(home_account).unwrap().balance(), dec!(100));
}

#[test]
fn accrual_is_recorded_as_a_deposit() {
    let (mut bank, account) = bank_with_account();
    let mut seed = DepositOperation::new(&bank, account, dec!(100)).unwrap();
    assert!(seed.execute(&mut bank));
    let mut interest = InterestAccrualOperation::new(&bank, account, dec!(0.5)).unwrap();
    assert!(interest.execute(&mut bank));

    assert_eq!(
        bank.account(account).unwrap().history()[1],
        format!("{}: DepositOperation", interest.id())
    );
    assert_eq!(interest.kind(), bank_core::OperationKind::InterestAccrual);
}
