use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::TransactionError,
};
use tokensmith_client::{
    read_keypair_file,
    rpc::{RpcConnection, RpcError},
};
use tokensmith_test_utils::{write_keypair_file, MockBehavior, MockRpcConnection};

fn transfer_instruction(payer: &Keypair) -> solana_sdk::instruction::Instruction {
    system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1)
}

#[tokio::test]
async fn confirm_behavior_returns_the_submitted_signature() {
    let mut rpc = MockRpcConnection::new(MockBehavior::Confirm);
    let payer = Keypair::new();

    let signature = rpc
        .create_and_send_transaction(&[transfer_instruction(&payer)], &payer.pubkey(), &[&payer])
        .await
        .unwrap();

    assert_eq!(signature, rpc.sent_transactions()[0].signatures[0]);
}

#[tokio::test]
async fn timeout_behavior_yields_no_signature() {
    let mut rpc = MockRpcConnection::new(MockBehavior::TimeOut);
    let payer = Keypair::new();

    let result = rpc
        .create_and_send_transaction(&[transfer_instruction(&payer)], &payer.pubkey(), &[&payer])
        .await;

    assert!(matches!(result, Err(RpcError::ConfirmationTimeout(_))));
}

#[tokio::test]
async fn failure_behavior_passes_the_error_through() {
    let mut rpc = MockRpcConnection::new(MockBehavior::FailWith(
        TransactionError::AlreadyProcessed,
    ));
    let payer = Keypair::new();

    let result = rpc
        .create_and_send_transaction(&[transfer_instruction(&payer)], &payer.pubkey(), &[&payer])
        .await;

    assert!(matches!(
        result,
        Err(RpcError::TransactionError(ref err)) if **err == TransactionError::AlreadyProcessed
    ));
}

#[tokio::test]
async fn airdrop_credits_the_seeded_balance() {
    let mut rpc = MockRpcConnection::default();
    let recipient = Pubkey::new_unique();

    rpc.airdrop_lamports(&recipient, 1_000_000_000).await.unwrap();

    assert_eq!(rpc.get_balance(&recipient).await.unwrap(), 1_000_000_000);
}

#[tokio::test]
async fn keypair_fixture_round_trips_through_the_wallet_loader() {
    let keypair = Keypair::new();
    let path = write_keypair_file(&keypair).unwrap();

    let loaded = read_keypair_file(&path).unwrap();
    assert_eq!(loaded.pubkey(), keypair.pubkey());
}
