//! Integration Tests for the NFT Edition Program
//!
//! These tests drive the full lifecycle of a master edition and its prints
//! through the `solana-program-test` framework.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test-sbf
//! # or for faster iteration:
//! cargo test
//! ```

use nft_edition_program::{
    error::EditionError,
    instruction::{self, PrintEditionKeys},
    pda::{
        find_delegate_address, find_edition_address, find_edition_marker_address,
        find_metadata_address, find_token_account_address,
    },
    state::{
        COption, Creator, Data, Delegation, Edition, EditionKind, EditionMarker,
        MasterBurnPolicy, MasterEdition, Metadata, Mint, Pack, TokenAccount,
    },
};
use solana_program::pubkey::Pubkey;
use solana_program_test::*;
use solana_sdk::{
    account::Account,
    hash::Hash,
    instruction::{Instruction, InstructionError},
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

/// Create a ProgramTest instance configured for the edition program
fn program_test() -> ProgramTest {
    ProgramTest::new(
        "nft_edition_program",
        nft_edition_program::id(),
        processor!(nft_edition_program::entrypoint::process_instruction),
    )
}

/// Sign `instructions` with the payer plus `signers` and submit them
async fn send(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    instructions: &[Instruction],
    signers: &[&Keypair],
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let mut all_signers = vec![payer];
    all_signers.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        recent_blockhash,
    );

    banks_client.process_transaction(tx).await
}

/// Helper to create and initialize a mint in one transaction
async fn create_mint(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Keypair,
    mint_authority: &Keypair,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let program_id = nft_edition_program::id();

    send(
        banks_client,
        payer,
        &[
            instruction::create_mint(&program_id, &mint.pubkey(), &payer.pubkey()),
            instruction::initialize_mint(&program_id, &mint.pubkey(), &mint_authority.pubkey()),
        ],
        &[mint, mint_authority],
        recent_blockhash,
    )
    .await
}

/// Helper to create the token account of `owner` for `mint`
async fn create_token_account(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
    recent_blockhash: Hash,
) -> Result<Pubkey, BanksClientError> {
    let program_id = nft_edition_program::id();
    let ix = instruction::create_token_account(&program_id, &payer.pubkey(), owner, mint).unwrap();
    let address = ix.accounts[0].pubkey;

    send(banks_client, payer, &[ix], &[], recent_blockhash).await?;
    Ok(address)
}

/// Helper to mint tokens
async fn mint_tokens(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Keypair,
    amount: u64,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    send(
        banks_client,
        payer,
        &[instruction::mint_to(
            &nft_edition_program::id(),
            mint,
            destination,
            &mint_authority.pubkey(),
            amount,
        )],
        &[mint_authority],
        recent_blockhash,
    )
    .await
}

/// Helper to attach metadata, with the payer as both authorities
async fn create_metadata(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    data: Data,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let ix = instruction::create_metadata(
        &nft_edition_program::id(),
        mint,
        &payer.pubkey(),
        &payer.pubkey(),
        &payer.pubkey(),
        true,
        data,
    )
    .unwrap();

    send(banks_client, payer, &[ix], &[], recent_blockhash).await
}

/// Helper to promote a mint to a master edition, with the payer as both authorities
async fn create_master_edition(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    max_supply: Option<u64>,
    burn_policy: MasterBurnPolicy,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let ix = instruction::create_master_edition(
        &nft_edition_program::id(),
        mint,
        &payer.pubkey(),
        &payer.pubkey(),
        &payer.pubkey(),
        max_supply,
        burn_policy,
    )
    .unwrap();

    send(banks_client, payer, &[ix], &[], recent_blockhash).await
}

/// Descriptor used by most tests: a single verified creator holding 100%
fn sample_data(creator: &Pubkey) -> Data {
    Data {
        name: "Hello I'm back".to_string(),
        symbol: "HIB".to_string(),
        uri: "https://example.com/hib.json".to_string(),
        seller_fee_basis_points: 500,
        creators: vec![Creator {
            address: *creator,
            verified: true,
            share: 100,
        }],
    }
}

/// Build a master edition owned by the payer: mint, token account holding
/// the single unit, metadata, then the master edition record.
async fn setup_master(
    context: &mut ProgramTestContext,
    max_supply: Option<u64>,
    burn_policy: MasterBurnPolicy,
) -> Keypair {
    let mint = Keypair::new();
    let payer_key = context.payer.pubkey();
    let blockhash = context.last_blockhash;

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        blockhash,
    )
    .await
    .unwrap();

    let token_account = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &payer_key,
        &mint.pubkey(),
        blockhash,
    )
    .await
    .unwrap();

    mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        &token_account,
        &context.payer,
        1,
        blockhash,
    )
    .await
    .unwrap();

    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        blockhash,
    )
    .await
    .unwrap();

    create_master_edition(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        max_supply,
        burn_policy,
        blockhash,
    )
    .await
    .unwrap();

    mint
}

/// Create a fresh print mint holding one unit in the payer's token account,
/// then request print number `edition` of `master_mint`.
///
/// Returns the print mint whether or not the print itself succeeded.
async fn issue_print(
    context: &mut ProgramTestContext,
    master_mint: &Pubkey,
    edition: u64,
) -> (Keypair, Result<(), BanksClientError>) {
    let print_mint = Keypair::new();
    let payer_key = context.payer.pubkey();
    let blockhash = context.last_blockhash;

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &print_mint,
        &context.payer,
        blockhash,
    )
    .await
    .unwrap();

    let token_account = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &payer_key,
        &print_mint.pubkey(),
        blockhash,
    )
    .await
    .unwrap();

    mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &print_mint.pubkey(),
        &token_account,
        &context.payer,
        1,
        blockhash,
    )
    .await
    .unwrap();

    let keys = PrintEditionKeys {
        master_mint: *master_mint,
        master_token_owner: payer_key,
        print_mint: print_mint.pubkey(),
        print_mint_authority: payer_key,
        print_owner: payer_key,
        payer: payer_key,
    };
    let ix = instruction::create_print_edition(&nft_edition_program::id(), &keys, edition).unwrap();

    let result = send(&mut context.banks_client, &context.payer, &[ix], &[], blockhash).await;
    (print_mint, result)
}

/// Helper to get and unpack any record
async fn get_record<T: Pack>(banks_client: &mut BanksClient, address: &Pubkey) -> T {
    let account = banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap();
    T::unpack_from_slice(&account.data).unwrap()
}

/// Helper to get and unpack a mint
async fn get_mint(banks_client: &mut BanksClient, address: &Pubkey) -> Mint {
    get_record(banks_client, address).await
}

/// Helper to get and unpack the token account of `owner` for `mint`
async fn get_token_account(
    banks_client: &mut BanksClient,
    owner: &Pubkey,
    mint: &Pubkey,
) -> TokenAccount {
    let (address, _) = find_token_account_address(&nft_edition_program::id(), owner, mint).unwrap();
    get_record(banks_client, &address).await
}

async fn get_metadata(banks_client: &mut BanksClient, mint: &Pubkey) -> Metadata {
    let (address, _) = find_metadata_address(&nft_edition_program::id(), mint).unwrap();
    get_record(banks_client, &address).await
}

async fn get_master_edition(banks_client: &mut BanksClient, mint: &Pubkey) -> MasterEdition {
    let (address, _) = find_edition_address(&nft_edition_program::id(), mint).unwrap();
    get_record(banks_client, &address).await
}

async fn get_edition(banks_client: &mut BanksClient, print_mint: &Pubkey) -> Edition {
    let (address, _) = find_edition_address(&nft_edition_program::id(), print_mint).unwrap();
    get_record(banks_client, &address).await
}

async fn account_exists(banks_client: &mut BanksClient, address: &Pubkey) -> bool {
    banks_client.get_account(*address).await.unwrap().is_some()
}

/// Helper to get a blockhash no earlier transaction was signed with, so a
/// repeated instruction is not rejected as a duplicate signature
async fn get_recent_blockhash(context: &mut ProgramTestContext) -> Hash {
    context.get_new_latest_blockhash().await.unwrap()
}

/// Assert that a transaction failed with the given program error
fn assert_edition_error(result: Result<(), BanksClientError>, expected: EditionError) {
    let err = result.expect_err("transaction should have failed").unwrap();
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            assert_eq!(code, expected as u32, "expected {:?}", expected)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

// =============================================================================
// MINT TESTS
// =============================================================================

#[tokio::test]
async fn test_create_mint() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let mint_authority = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &mint_authority,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let mint_state = get_mint(&mut context.banks_client, &mint.pubkey()).await;
    assert_eq!(mint_state.decimals, 0);
    assert_eq!(mint_state.supply, 0);
    assert_eq!(
        mint_state.mint_authority.as_ref(),
        Some(&mint_authority.pubkey())
    );
}

#[tokio::test]
async fn test_initialize_mint_twice_fails() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let mint_authority = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &mint_authority,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let other_authority = Keypair::new();
    let result = send(
        &mut context.banks_client,
        &context.payer,
        &[instruction::initialize_mint(
            &nft_edition_program::id(),
            &mint.pubkey(),
            &other_authority.pubkey(),
        )],
        &[&other_authority],
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::AlreadyInitialized);
}

// =============================================================================
// TOKEN ACCOUNT TESTS
// =============================================================================

#[tokio::test]
async fn test_create_token_account() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let owner = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        context.last_blockhash,
    )
    .await
    .unwrap();

    create_token_account(
        &mut context.banks_client,
        &context.payer,
        &owner.pubkey(),
        &mint.pubkey(),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let account = get_token_account(&mut context.banks_client, &owner.pubkey(), &mint.pubkey()).await;
    assert_eq!(account.mint, mint.pubkey());
    assert_eq!(account.owner, owner.pubkey());
    assert_eq!(account.amount, 0);
    assert!(account.delegate.is_none());
}

#[tokio::test]
async fn test_create_token_account_twice_fails() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let owner = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        context.last_blockhash,
    )
    .await
    .unwrap();

    create_token_account(
        &mut context.banks_client,
        &context.payer,
        &owner.pubkey(),
        &mint.pubkey(),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let blockhash = get_recent_blockhash(&mut context).await;
    let result = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &owner.pubkey(),
        &mint.pubkey(),
        blockhash,
    )
    .await
    .map(|_| ());

    assert_edition_error(result, EditionError::AccountAlreadyExists);
}

// =============================================================================
// MINT TO TESTS
// =============================================================================

#[tokio::test]
async fn test_mint_to() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let owner = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let token_account = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &owner.pubkey(),
        &mint.pubkey(),
        context.last_blockhash,
    )
    .await
    .unwrap();

    mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        &token_account,
        &context.payer,
        7,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let mint_state = get_mint(&mut context.banks_client, &mint.pubkey()).await;
    assert_eq!(mint_state.supply, 7);

    let account = get_token_account(&mut context.banks_client, &owner.pubkey(), &mint.pubkey()).await;
    assert_eq!(account.amount, 7);
}

#[tokio::test]
async fn test_mint_to_wrong_authority_fails() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let wrong_authority = Keypair::new();

    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let token_account = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &context.payer.pubkey(),
        &mint.pubkey(),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let result = mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        &token_account,
        &wrong_authority,
        1,
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::InvalidAuthority);
}

// =============================================================================
// METADATA TESTS
// =============================================================================

/// Mint with the payer as authority, ready for metadata.
async fn setup_mint(context: &mut ProgramTestContext) -> Keypair {
    let mint = Keypair::new();
    let blockhash = context.last_blockhash;
    create_mint(
        &mut context.banks_client,
        &context.payer,
        &mint,
        &context.payer,
        blockhash,
    )
    .await
    .unwrap();
    mint
}

/// Creators splitting `shares`; the first is the payer and verified.
fn data_with_shares(payer: &Pubkey, shares: &[u8]) -> Data {
    let creators = shares
        .iter()
        .enumerate()
        .map(|(i, share)| Creator {
            address: if i == 0 { *payer } else { Pubkey::new_unique() },
            verified: i == 0,
            share: *share,
        })
        .collect();

    Data {
        creators,
        ..sample_data(payer)
    }
}

#[tokio::test]
async fn test_create_metadata() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();

    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let metadata = get_metadata(&mut context.banks_client, &mint.pubkey()).await;
    assert_eq!(metadata.mint, mint.pubkey());
    assert_eq!(metadata.update_authority, payer_key);
    assert_eq!(metadata.data, sample_data(&payer_key));
    assert!(metadata.is_mutable);
    assert_eq!(metadata.edition_kind, EditionKind::Standalone);
}

#[tokio::test]
async fn test_create_metadata_share_sum_must_be_100() {
    let mut context = program_test().start_with_context().await;
    let payer_key = context.payer.pubkey();

    for shares in [&[99u8][..], &[60, 41][..]] {
        let mint = setup_mint(&mut context).await;
        let result = create_metadata(
            &mut context.banks_client,
            &context.payer,
            &mint.pubkey(),
            data_with_shares(&payer_key, shares),
            context.last_blockhash,
        )
        .await;
        assert_edition_error(result, EditionError::InvalidCreatorShares);
    }

    for shares in [
        &[100u8][..],
        &[50, 50][..],
        &[34, 33, 33][..],
        &[25, 25, 25, 25][..],
        &[20, 20, 20, 20, 20][..],
    ] {
        let mint = setup_mint(&mut context).await;
        create_metadata(
            &mut context.banks_client,
            &context.payer,
            &mint.pubkey(),
            data_with_shares(&payer_key, shares),
            context.last_blockhash,
        )
        .await
        .unwrap();

        let metadata = get_metadata(&mut context.banks_client, &mint.pubkey()).await;
        assert_eq!(metadata.data.creators.len(), shares.len());
    }
}

#[tokio::test]
async fn test_create_metadata_name_too_long_fails() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();

    let data = Data {
        name: "x".repeat(33),
        ..sample_data(&payer_key)
    };
    let result = create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        data,
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::NameTooLong);
}

#[tokio::test]
async fn test_create_metadata_unsigned_verified_creator_fails() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let update_authority = Keypair::new();

    // The update authority is marked verified but does not sign
    let ix = instruction::create_metadata(
        &nft_edition_program::id(),
        &mint.pubkey(),
        &context.payer.pubkey(),
        &context.payer.pubkey(),
        &update_authority.pubkey(),
        false,
        sample_data(&update_authority.pubkey()),
    )
    .unwrap();

    let result = send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::CreatorNotVerifiable);
}

#[tokio::test]
async fn test_create_metadata_twice_fails() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();

    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let blockhash = get_recent_blockhash(&mut context).await;
    let result = create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::AccountAlreadyExists);
}

#[tokio::test]
async fn test_update_metadata() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();

    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let new_data = Data {
        name: "Renamed".to_string(),
        ..sample_data(&payer_key)
    };
    let ix = instruction::update_metadata(
        &nft_edition_program::id(),
        &mint.pubkey(),
        &payer_key,
        Some(new_data.clone()),
        None,
        Some(false),
    )
    .unwrap();
    send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await
    .unwrap();

    let metadata = get_metadata(&mut context.banks_client, &mint.pubkey()).await;
    assert_eq!(metadata.data, new_data);
    assert!(!metadata.is_mutable);

    // Immutable from here on
    let ix = instruction::update_metadata(
        &nft_edition_program::id(),
        &mint.pubkey(),
        &payer_key,
        Some(sample_data(&payer_key)),
        None,
        None,
    )
    .unwrap();
    let result = send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::MetadataImmutable);
}

#[tokio::test]
async fn test_update_metadata_wrong_authority_fails() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();
    let stranger = Keypair::new();

    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let ix = instruction::update_metadata(
        &nft_edition_program::id(),
        &mint.pubkey(),
        &stranger.pubkey(),
        None,
        Some(stranger.pubkey()),
        None,
    )
    .unwrap();
    let result = send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[&stranger],
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::UpdateAuthorityMismatch);
}

// =============================================================================
// MASTER EDITION TESTS
// =============================================================================

#[tokio::test]
async fn test_create_master_edition() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(record.mint, master.pubkey());
    assert_eq!(record.supply, 0);
    assert_eq!(record.max_supply.as_ref(), Some(&3));
    assert_eq!(record.burned_prints, 0);
    assert_eq!(record.burn_policy, MasterBurnPolicy::RequireNoOutstandingPrints);

    // Mint authority is gone for good
    let mint_state = get_mint(&mut context.banks_client, &master.pubkey()).await;
    assert!(mint_state.mint_authority.is_none());
    assert_eq!(mint_state.supply, 1);

    let metadata = get_metadata(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(metadata.edition_kind, EditionKind::Master);
}

#[tokio::test]
async fn test_create_master_edition_requires_supply_of_one() {
    let mut context = program_test().start_with_context().await;
    let mint = setup_mint(&mut context).await;
    let payer_key = context.payer.pubkey();

    let token_account = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &payer_key,
        &mint.pubkey(),
        context.last_blockhash,
    )
    .await
    .unwrap();
    mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        &token_account,
        &context.payer,
        2,
        context.last_blockhash,
    )
    .await
    .unwrap();
    create_metadata(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        sample_data(&payer_key),
        context.last_blockhash,
    )
    .await
    .unwrap();

    let result = create_master_edition(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        Some(1),
        MasterBurnPolicy::default(),
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::MasterSupplyNotOne);
}

#[tokio::test]
async fn test_create_master_edition_twice_fails() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let blockhash = get_recent_blockhash(&mut context).await;
    let result = create_master_edition(
        &mut context.banks_client,
        &context.payer,
        &master.pubkey(),
        Some(3),
        MasterBurnPolicy::default(),
        blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::AccountAlreadyExists);
}

#[tokio::test]
async fn test_mint_to_after_master_edition_fails() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, None, MasterBurnPolicy::default()).await;
    let payer_key = context.payer.pubkey();

    let (token_account, _) =
        find_token_account_address(&nft_edition_program::id(), &payer_key, &master.pubkey())
            .unwrap();
    let blockhash = get_recent_blockhash(&mut context).await;
    let result = mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &master.pubkey(),
        &token_account,
        &context.payer,
        1,
        blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::MintAuthorityRequired);
}

// =============================================================================
// PRINT EDITION TESTS
// =============================================================================

#[tokio::test]
async fn test_print_first_edition() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;
    let program_id = nft_edition_program::id();

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    let master_record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_record.supply, 1);

    let edition = get_edition(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(edition.edition, 1);
    let (master_edition_address, _) = find_edition_address(&program_id, &master.pubkey()).unwrap();
    assert_eq!(edition.parent, master_edition_address);

    // Print metadata copies the master's descriptor
    let master_metadata = get_metadata(&mut context.banks_client, &master.pubkey()).await;
    let print_metadata = get_metadata(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(print_metadata.data, master_metadata.data);
    assert_eq!(print_metadata.update_authority, master_metadata.update_authority);
    assert_eq!(print_metadata.edition_kind, EditionKind::Print);
    assert_eq!(print_metadata.data.name, "Hello I'm back");
    assert_eq!(print_metadata.data.symbol, "HIB");

    let (marker_address, _) =
        find_edition_marker_address(&program_id, &master.pubkey(), 1).unwrap();
    let marker: EditionMarker = get_record(&mut context.banks_client, &marker_address).await;
    assert!(marker.edition_taken(1));
    assert!(!marker.edition_taken(2));

    let print_mint = get_mint(&mut context.banks_client, &print.pubkey()).await;
    assert!(print_mint.mint_authority.is_none());
    assert_eq!(print_mint.supply, 1);
}

#[tokio::test]
async fn test_print_beyond_max_supply_fails() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    for edition in 1..=3 {
        let (_, result) = issue_print(&mut context, &master.pubkey(), edition).await;
        result.unwrap();
    }

    let (_, result) = issue_print(&mut context, &master.pubkey(), 4).await;
    assert_edition_error(result, EditionError::EditionsExhausted);

    let master_record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_record.supply, 3);
}

#[tokio::test]
async fn test_print_out_of_sequence_fails() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let (_, result) = issue_print(&mut context, &master.pubkey(), 2).await;
    assert_edition_error(result, EditionError::EditionNumberOutOfSequence);

    let master_record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_record.supply, 0);
}

#[tokio::test]
async fn test_print_with_zero_max_supply_fails() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, Some(0), MasterBurnPolicy::default()).await;

    let (_, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    assert_edition_error(result, EditionError::EditionsExhausted);
}

#[tokio::test]
async fn test_print_unlimited_supply() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(&mut context, None, MasterBurnPolicy::default()).await;

    for edition in 1..=4 {
        let (print, result) = issue_print(&mut context, &master.pubkey(), edition).await;
        result.unwrap();

        let record = get_edition(&mut context.banks_client, &print.pubkey()).await;
        assert_eq!(record.edition, edition);
    }

    let master_record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_record.supply, 4);
    assert!(master_record.max_supply.is_none());
}

#[tokio::test]
async fn test_print_with_prefunded_marker_address() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    // Someone sends lamports to the marker address before print #1 exists
    let (marker_address, _) =
        find_edition_marker_address(&program_id, &master.pubkey(), 1).unwrap();
    send(
        &mut context.banks_client,
        &context.payer,
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            &marker_address,
            1_000_000,
        )],
        &[],
        context.last_blockhash,
    )
    .await
    .unwrap();

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    let marker_account = context
        .banks_client
        .get_account(marker_address)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(marker_account.owner, program_id);
    assert_eq!(marker_account.data.len(), EditionMarker::LEN);

    let marker = EditionMarker::unpack_from_slice(&marker_account.data).unwrap();
    assert!(marker.edition_taken(1));

    let edition = get_edition(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(edition.edition, 1);
}

/// Serialize a record into a fresh account owned by the program
fn record_account<T: Pack>(record: &T) -> Account {
    let mut data = vec![0u8; T::LEN];
    record.pack_into_slice(&mut data).unwrap();
    Account {
        lamports: 1_000_000_000,
        data,
        owner: nft_edition_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

#[tokio::test]
async fn test_print_crosses_marker_boundary() {
    let program_id = nft_edition_program::id();
    let master_mint = Pubkey::new_unique();
    let collector = Keypair::new();

    // Seed a master that has already issued 247 prints
    let mut test = program_test();
    test.add_account(
        master_mint,
        record_account(&Mint {
            mint_authority: COption::none(),
            supply: 1,
            decimals: 0,
        }),
    );
    let (master_token, _) =
        find_token_account_address(&program_id, &collector.pubkey(), &master_mint).unwrap();
    test.add_account(
        master_token,
        record_account(&TokenAccount {
            mint: master_mint,
            owner: collector.pubkey(),
            amount: 1,
            delegate: COption::none(),
        }),
    );
    let (master_metadata, _) = find_metadata_address(&program_id, &master_mint).unwrap();
    test.add_account(
        master_metadata,
        record_account(&Metadata {
            update_authority: collector.pubkey(),
            mint: master_mint,
            data: sample_data(&collector.pubkey()),
            is_mutable: true,
            edition_kind: EditionKind::Master,
        }),
    );
    let (master_edition, _) = find_edition_address(&program_id, &master_mint).unwrap();
    test.add_account(
        master_edition,
        record_account(&MasterEdition {
            mint: master_mint,
            supply: 247,
            max_supply: COption::none(),
            burned_prints: 0,
            burn_policy: MasterBurnPolicy::default(),
        }),
    );

    let mut context = test.start_with_context().await;
    let payer_key = context.payer.pubkey();

    for edition in [248u64, 249] {
        let print_mint = Keypair::new();
        let blockhash = context.last_blockhash;

        create_mint(
            &mut context.banks_client,
            &context.payer,
            &print_mint,
            &context.payer,
            blockhash,
        )
        .await
        .unwrap();
        let print_token = create_token_account(
            &mut context.banks_client,
            &context.payer,
            &payer_key,
            &print_mint.pubkey(),
            blockhash,
        )
        .await
        .unwrap();
        mint_tokens(
            &mut context.banks_client,
            &context.payer,
            &print_mint.pubkey(),
            &print_token,
            &context.payer,
            1,
            blockhash,
        )
        .await
        .unwrap();

        let keys = PrintEditionKeys {
            master_mint,
            master_token_owner: collector.pubkey(),
            print_mint: print_mint.pubkey(),
            print_mint_authority: payer_key,
            print_owner: payer_key,
            payer: payer_key,
        };
        let ix = instruction::create_print_edition(&program_id, &keys, edition).unwrap();
        send(
            &mut context.banks_client,
            &context.payer,
            &[ix],
            &[&collector],
            blockhash,
        )
        .await
        .unwrap();

        let record = get_edition(&mut context.banks_client, &print_mint.pubkey()).await;
        assert_eq!(record.edition, edition);
    }

    // 248 and 249 share the second marker, which starts at bit 0
    let (first_marker, _) = find_edition_marker_address(&program_id, &master_mint, 247).unwrap();
    let (second_marker, _) = find_edition_marker_address(&program_id, &master_mint, 248).unwrap();
    assert_ne!(first_marker, second_marker);
    assert_eq!(
        find_edition_marker_address(&program_id, &master_mint, 249).unwrap().0,
        second_marker
    );
    assert!(!account_exists(&mut context.banks_client, &first_marker).await);

    let marker: EditionMarker = get_record(&mut context.banks_client, &second_marker).await;
    assert_eq!(marker.ledger[0], 0b1100_0000);
    assert!(marker.edition_taken(248));
    assert!(marker.edition_taken(249));

    let master_record = get_master_edition(&mut context.banks_client, &master_mint).await;
    assert_eq!(master_record.supply, 249);
}

// =============================================================================
// DELEGATION TESTS
// =============================================================================

/// Mint `amount` units into the payer's account and create an empty
/// destination for another owner. Returns (mint, source, destination).
async fn setup_transfer(context: &mut ProgramTestContext, amount: u64) -> (Keypair, Pubkey, Pubkey) {
    let mint = setup_mint(context).await;
    let payer_key = context.payer.pubkey();
    let recipient = Keypair::new();
    let blockhash = context.last_blockhash;

    let source = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &payer_key,
        &mint.pubkey(),
        blockhash,
    )
    .await
    .unwrap();
    let destination = create_token_account(
        &mut context.banks_client,
        &context.payer,
        &recipient.pubkey(),
        &mint.pubkey(),
        blockhash,
    )
    .await
    .unwrap();
    mint_tokens(
        &mut context.banks_client,
        &context.payer,
        &mint.pubkey(),
        &source,
        &context.payer,
        amount,
        blockhash,
    )
    .await
    .unwrap();

    (mint, source, destination)
}

async fn delegate(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    source: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let ix = instruction::delegate(&nft_edition_program::id(), source, &payer.pubkey(), amount)
        .unwrap();
    send(banks_client, payer, &[ix], &[], recent_blockhash).await
}

async fn transfer_via_delegate(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    source: &Pubkey,
    destination: &Pubkey,
    amount: u64,
    bump: u8,
    recent_blockhash: Hash,
) -> Result<(), BanksClientError> {
    let ix = instruction::transfer_via_delegate(
        &nft_edition_program::id(),
        source,
        destination,
        &payer.pubkey(),
        amount,
        bump,
    )
    .unwrap();
    send(banks_client, payer, &[ix], &[], recent_blockhash).await
}

#[tokio::test]
async fn test_delegate_then_transfer() {
    let mut context = program_test().start_with_context().await;
    let (mint, source, destination) = setup_transfer(&mut context, 1).await;
    let payer_key = context.payer.pubkey();
    let (record, bump) = find_delegate_address(&nft_edition_program::id(), &payer_key).unwrap();

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        1,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let source_state = get_token_account(&mut context.banks_client, &payer_key, &mint.pubkey()).await;
    assert_eq!(source_state.delegate.as_ref(), Some(&record));

    transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        1,
        bump,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let source_state: TokenAccount = get_record(&mut context.banks_client, &source).await;
    let dest_state: TokenAccount = get_record(&mut context.banks_client, &destination).await;
    assert_eq!(source_state.amount, 0);
    assert_eq!(dest_state.amount, 1);
    assert!(source_state.delegate.is_none());

    // Ceiling fully consumed, record closed
    assert!(!account_exists(&mut context.banks_client, &record).await);

    let blockhash = get_recent_blockhash(&mut context).await;
    let result = transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        1,
        bump,
        blockhash,
    )
    .await;
    assert_edition_error(result, EditionError::NoActiveDelegation);
}

#[tokio::test]
async fn test_transfer_partial_then_exceed_ceiling() {
    let mut context = program_test().start_with_context().await;
    let (_mint, source, destination) = setup_transfer(&mut context, 5).await;
    let payer_key = context.payer.pubkey();
    let (record, bump) = find_delegate_address(&nft_edition_program::id(), &payer_key).unwrap();

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        2,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let result = transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        3,
        bump,
        context.last_blockhash,
    )
    .await;
    assert_edition_error(result, EditionError::DelegatedAmountExceeded);

    transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        1,
        bump,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let delegation: Delegation = get_record(&mut context.banks_client, &record).await;
    assert_eq!(delegation.amount, 1);
    assert_eq!(delegation.source, source);

    let source_state: TokenAccount = get_record(&mut context.banks_client, &source).await;
    assert_eq!(source_state.amount, 4);
}

#[tokio::test]
async fn test_transfer_with_wrong_bump_fails() {
    let mut context = program_test().start_with_context().await;
    let (_mint, source, destination) = setup_transfer(&mut context, 1).await;
    let payer_key = context.payer.pubkey();
    let (_, bump) = find_delegate_address(&nft_edition_program::id(), &payer_key).unwrap();

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        1,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let result = transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        1,
        bump.wrapping_sub(1),
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::InvalidDelegateBump);
}

#[tokio::test]
async fn test_revoke() {
    let mut context = program_test().start_with_context().await;
    let (_mint, source, destination) = setup_transfer(&mut context, 1).await;
    let payer_key = context.payer.pubkey();
    let program_id = nft_edition_program::id();
    let (record, bump) = find_delegate_address(&program_id, &payer_key).unwrap();

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        1,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let ix = instruction::revoke(&program_id, &source, &payer_key).unwrap();
    send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await
    .unwrap();

    assert!(!account_exists(&mut context.banks_client, &record).await);
    let source_state: TokenAccount = get_record(&mut context.banks_client, &source).await;
    assert!(source_state.delegate.is_none());

    let result = transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &destination,
        1,
        bump,
        context.last_blockhash,
    )
    .await;
    assert_edition_error(result, EditionError::NoActiveDelegation);
}

#[tokio::test]
async fn test_transfer_to_self_fails() {
    let mut context = program_test().start_with_context().await;
    let (_mint, source, _destination) = setup_transfer(&mut context, 1).await;
    let payer_key = context.payer.pubkey();
    let (_, bump) = find_delegate_address(&nft_edition_program::id(), &payer_key).unwrap();

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        1,
        context.last_blockhash,
    )
    .await
    .unwrap();

    let result = transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source,
        &source,
        1,
        bump,
        context.last_blockhash,
    )
    .await;

    assert_edition_error(result, EditionError::SelfTransfer);
}

#[tokio::test]
async fn test_delegation_record_bound_to_one_source() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let payer_key = context.payer.pubkey();
    let (record, bump) = find_delegate_address(&program_id, &payer_key).unwrap();

    // Two token accounts of the same owner, on different mints
    let (_mint_a, source_a, _dest_a) = setup_transfer(&mut context, 1).await;
    let (_mint_b, source_b, dest_b) = setup_transfer(&mut context, 1).await;

    delegate(
        &mut context.banks_client,
        &context.payer,
        &source_a,
        1,
        context.last_blockhash,
    )
    .await
    .unwrap();

    // The owner's single record already serves source A
    let result = delegate(
        &mut context.banks_client,
        &context.payer,
        &source_b,
        1,
        context.last_blockhash,
    )
    .await;
    assert_edition_error(result, EditionError::DelegationInUse);

    let delegation: Delegation = get_record(&mut context.banks_client, &record).await;
    assert_eq!(delegation.source, source_a);

    // Revoking on B does not touch A's delegation
    let ix = instruction::revoke(&program_id, &source_b, &payer_key).unwrap();
    let result = send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await;
    assert_edition_error(result, EditionError::NoActiveDelegation);
    assert!(account_exists(&mut context.banks_client, &record).await);

    // Once A is revoked the record can move to B
    let ix = instruction::revoke(&program_id, &source_a, &payer_key).unwrap();
    send(
        &mut context.banks_client,
        &context.payer,
        &[ix],
        &[],
        context.last_blockhash,
    )
    .await
    .unwrap();

    let blockhash = get_recent_blockhash(&mut context).await;
    delegate(&mut context.banks_client, &context.payer, &source_b, 1, blockhash)
        .await
        .unwrap();
    transfer_via_delegate(
        &mut context.banks_client,
        &context.payer,
        &source_b,
        &dest_b,
        1,
        bump,
        blockhash,
    )
    .await
    .unwrap();

    let dest_state: TokenAccount = get_record(&mut context.banks_client, &dest_b).await;
    assert_eq!(dest_state.amount, 1);
    let source_a_state: TokenAccount = get_record(&mut context.banks_client, &source_a).await;
    assert_eq!(source_a_state.amount, 1);
    assert!(source_a_state.delegate.is_none());
}

// =============================================================================
// BURN TESTS
// =============================================================================

async fn burn_print(
    context: &mut ProgramTestContext,
    print_mint: &Pubkey,
    master_mint: &Pubkey,
    edition: u64,
) -> Result<(), BanksClientError> {
    let program_id = nft_edition_program::id();
    let payer_key = context.payer.pubkey();
    let (master_token_account, _) =
        find_token_account_address(&program_id, &payer_key, master_mint).unwrap();
    let ix = instruction::burn_print(
        &program_id,
        &payer_key,
        print_mint,
        master_mint,
        &master_token_account,
        edition,
    )
    .unwrap();

    let blockhash = context.last_blockhash;
    send(&mut context.banks_client, &context.payer, &[ix], &[], blockhash).await
}

async fn burn_master(
    context: &mut ProgramTestContext,
    master_mint: &Pubkey,
) -> Result<(), BanksClientError> {
    let payer_key = context.payer.pubkey();
    let ix = instruction::burn_master(&nft_edition_program::id(), &payer_key, master_mint).unwrap();

    let blockhash = context.last_blockhash;
    send(&mut context.banks_client, &context.payer, &[ix], &[], blockhash).await
}

#[tokio::test]
async fn test_burn_print() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    burn_print(&mut context, &print.pubkey(), &master.pubkey(), 1)
        .await
        .unwrap();

    // Supply is a high-water mark; the marker keeps the number taken
    let master_record = get_master_edition(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_record.supply, 1);
    assert_eq!(master_record.burned_prints, 1);

    let (marker_address, _) =
        find_edition_marker_address(&program_id, &master.pubkey(), 1).unwrap();
    let marker: EditionMarker = get_record(&mut context.banks_client, &marker_address).await;
    assert!(marker.edition_taken(1));

    let (print_edition, _) = find_edition_address(&program_id, &print.pubkey()).unwrap();
    let (print_metadata, _) = find_metadata_address(&program_id, &print.pubkey()).unwrap();
    assert!(!account_exists(&mut context.banks_client, &print_edition).await);
    assert!(!account_exists(&mut context.banks_client, &print_metadata).await);

    let print_mint = get_mint(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(print_mint.supply, 0);

    // The number is not handed out again
    let (_, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    assert_edition_error(result, EditionError::EditionNumberOutOfSequence);
}

#[tokio::test]
async fn test_burn_master_blocked_by_outstanding_prints() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    let result = burn_master(&mut context, &master.pubkey()).await;
    assert_edition_error(result, EditionError::OutstandingPrints);

    burn_print(&mut context, &print.pubkey(), &master.pubkey(), 1)
        .await
        .unwrap();

    // Same instruction as the rejected attempt, so sign it with a new blockhash
    context.last_blockhash = get_recent_blockhash(&mut context).await;
    burn_master(&mut context, &master.pubkey()).await.unwrap();

    let (master_edition, _) = find_edition_address(&program_id, &master.pubkey()).unwrap();
    let (master_metadata, _) = find_metadata_address(&program_id, &master.pubkey()).unwrap();
    assert!(!account_exists(&mut context.banks_client, &master_edition).await);
    assert!(!account_exists(&mut context.banks_client, &master_metadata).await);

    let master_mint = get_mint(&mut context.banks_client, &master.pubkey()).await;
    assert_eq!(master_mint.supply, 0);
}

#[tokio::test]
async fn test_burn_master_with_outstanding_prints_when_allowed() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let master = setup_master(
        &mut context,
        Some(3),
        MasterBurnPolicy::AllowOutstandingPrints,
    )
    .await;

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    burn_master(&mut context, &master.pubkey()).await.unwrap();

    let (master_edition, _) = find_edition_address(&program_id, &master.pubkey()).unwrap();
    assert!(!account_exists(&mut context.banks_client, &master_edition).await);

    // The print survives its master
    let edition = get_edition(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(edition.edition, 1);
    let print_metadata = get_metadata(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(print_metadata.edition_kind, EditionKind::Print);
}

#[tokio::test]
async fn test_burn_print_after_master_burned() {
    let mut context = program_test().start_with_context().await;
    let program_id = nft_edition_program::id();
    let master = setup_master(
        &mut context,
        Some(3),
        MasterBurnPolicy::AllowOutstandingPrints,
    )
    .await;

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();

    burn_master(&mut context, &master.pubkey()).await.unwrap();
    burn_print(&mut context, &print.pubkey(), &master.pubkey(), 1)
        .await
        .unwrap();

    let (print_edition, _) = find_edition_address(&program_id, &print.pubkey()).unwrap();
    let (print_metadata, _) = find_metadata_address(&program_id, &print.pubkey()).unwrap();
    assert!(!account_exists(&mut context.banks_client, &print_edition).await);
    assert!(!account_exists(&mut context.banks_client, &print_metadata).await);

    let print_mint = get_mint(&mut context.banks_client, &print.pubkey()).await;
    assert_eq!(print_mint.supply, 0);
}

#[tokio::test]
async fn test_burn_print_after_master_burned_checks_lineage() {
    let mut context = program_test().start_with_context().await;
    let master = setup_master(
        &mut context,
        Some(3),
        MasterBurnPolicy::AllowOutstandingPrints,
    )
    .await;
    let other_master = setup_master(&mut context, Some(3), MasterBurnPolicy::default()).await;

    let (print, result) = issue_print(&mut context, &master.pubkey(), 1).await;
    result.unwrap();
    burn_master(&mut context, &master.pubkey()).await.unwrap();

    // Point at the closed parent record but claim a different master mint
    let program_id = nft_edition_program::id();
    let payer_key = context.payer.pubkey();
    let (other_token_account, _) =
        find_token_account_address(&program_id, &payer_key, &other_master.pubkey()).unwrap();
    let (closed_parent, _) = find_edition_address(&program_id, &master.pubkey()).unwrap();
    let mut ix = instruction::burn_print(
        &program_id,
        &payer_key,
        &print.pubkey(),
        &other_master.pubkey(),
        &other_token_account,
        1,
    )
    .unwrap();
    ix.accounts[6].pubkey = closed_parent;

    let blockhash = context.last_blockhash;
    let result = send(&mut context.banks_client, &context.payer, &[ix], &[], blockhash).await;
    assert_edition_error(result, EditionError::EditionParentMismatch);
}
