//! Harness driving the program through `solana-program-test`

#![allow(dead_code)]

use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::prelude::{AccountInfo, Pubkey, Rent};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction, InstructionError};
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::{system_program, AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::{self, get_associated_token_address_with_program_id};
use anchor_spl::token::{self, spl_token};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::{Transaction, TransactionError};
use ticketing_platform::accounts;
use ticketing_platform::error::ErrorCode;
use ticketing_platform::instruction as ix;
use ticketing_platform::state::{AssignedListing, FreeAccessListing, Platform, TicketInfo};

pub const USER_FUNDS: u64 = 10_000_000_000;

// Anchor's entry wants accounts living as long as their data borrows
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    ticketing_platform::entry(program_id, accounts, data)
}

pub fn platform() -> Pubkey {
    Platform::address().0
}

pub fn ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &token::ID)
}

pub fn vault(mint: &Pubkey) -> Pubkey {
    ata(&platform(), mint)
}

fn instruction(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: ticketing_platform::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub fn create_ata_ix(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    Instruction {
        program_id: associated_token::ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(ata(owner, mint), false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(token::ID, false),
        ],
        data: vec![0],
    }
}

pub fn initialize_ix(authority: &Pubkey) -> Instruction {
    instruction(
        accounts::InitializeAccountConstraints {
            authority: *authority,
            platform: platform(),
            system_program: system_program::ID,
        },
        ix::Initialize {},
    )
}

pub fn opt_in_ix(payer: &Pubkey, mint: &Pubkey) -> Instruction {
    instruction(
        accounts::OptInToAssetAccountConstraints {
            payer: *payer,
            platform: platform(),
            mint: *mint,
            vault: vault(mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::OptInToAsset {},
    )
}

pub fn is_opted_in_ix(mint: &Pubkey, vault: &Pubkey) -> Instruction {
    instruction(
        accounts::IsOptedInToAccountConstraints {
            platform: platform(),
            mint: *mint,
            vault: *vault,
            token_program: token::ID,
        },
        ix::IsOptedInTo {},
    )
}

pub fn mint_ticket_ix(issuer: &Pubkey, mint: &Pubkey, name: &str, ticket_link: &str) -> Instruction {
    instruction(
        accounts::MintTicketAccountConstraints {
            issuer: *issuer,
            mint: *mint,
            issuer_token_account: ata(issuer, mint),
            ticket_info: TicketInfo::address(mint).0,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::MintTicket {
            name: name.to_string(),
            ticket_link: ticket_link.to_string(),
        },
    )
}

pub fn new_listing_ix(seller: &Pubkey, mint: &Pubkey, unitary_price: u64) -> Instruction {
    instruction(
        accounts::NewListingAccountConstraints {
            seller: *seller,
            platform: platform(),
            mint: *mint,
            seller_token_account: ata(seller, mint),
            vault: vault(mint),
            listing: AssignedListing::address(mint).0,
            token_program: token::ID,
            system_program: system_program::ID,
        },
        ix::NewListing { unitary_price },
    )
}

pub fn change_price_ix(owner: &Pubkey, mint: &Pubkey, new_price: u64) -> Instruction {
    instruction(
        accounts::ChangePriceAccountConstraints {
            owner: *owner,
            mint: *mint,
            listing: AssignedListing::address(mint).0,
        },
        ix::ChangePrice { new_price },
    )
}

pub fn buy_ix(buyer: &Pubkey, seller: &Pubkey, mint: &Pubkey, payment: u64) -> Instruction {
    instruction(
        accounts::BuyAccountConstraints {
            buyer: *buyer,
            mint: *mint,
            listing: AssignedListing::address(mint).0,
            seller: *seller,
            platform: platform(),
            vault: vault(mint),
            buyer_token_account: ata(buyer, mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::Buy { payment },
    )
}

pub fn withdraw_asset_ix(owner: &Pubkey, mint: &Pubkey) -> Instruction {
    instruction(
        accounts::WithdrawAssetAccountConstraints {
            owner: *owner,
            mint: *mint,
            listing: AssignedListing::address(mint).0,
            platform: platform(),
            vault: vault(mint),
            owner_token_account: ata(owner, mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::WithdrawAsset {},
    )
}

pub fn new_listing_free_access_ix(
    seller: &Pubkey,
    mint: &Pubkey,
    quantity: u64,
    unitary_price: u64,
    nonce: u64,
) -> Instruction {
    instruction(
        accounts::NewListingFreeAccessAccountConstraints {
            seller: *seller,
            platform: platform(),
            mint: *mint,
            seller_token_account: ata(seller, mint),
            vault: vault(mint),
            listing: FreeAccessListing::address(mint, seller, nonce).0,
            token_program: token::ID,
            system_program: system_program::ID,
        },
        ix::NewListingFreeAccess {
            quantity,
            unitary_price,
            nonce,
        },
    )
}

pub fn change_price_free_access_ix(
    owner: &Pubkey,
    listing: &Pubkey,
    mint: &Pubkey,
    nonce: u64,
    new_price: u64,
) -> Instruction {
    instruction(
        accounts::ChangePriceFreeAccessAccountConstraints {
            owner: *owner,
            mint: *mint,
            listing: *listing,
        },
        ix::ChangePriceFreeAccess { nonce, new_price },
    )
}

pub fn deposit_ix(owner: &Pubkey, mint: &Pubkey, nonce: u64, quantity: u64) -> Instruction {
    instruction(
        accounts::DepositAccountConstraints {
            owner: *owner,
            platform: platform(),
            mint: *mint,
            owner_token_account: ata(owner, mint),
            vault: vault(mint),
            listing: FreeAccessListing::address(mint, owner, nonce).0,
            token_program: token::ID,
        },
        ix::Deposit { nonce, quantity },
    )
}

pub fn buy_free_access_ix(
    buyer: &Pubkey,
    seller: &Pubkey,
    mint: &Pubkey,
    nonce: u64,
    quantity: u64,
    payment: u64,
) -> Instruction {
    instruction(
        accounts::BuyFreeAccessTicketAccountConstraints {
            buyer: *buyer,
            seller: *seller,
            mint: *mint,
            listing: FreeAccessListing::address(mint, seller, nonce).0,
            platform: platform(),
            vault: vault(mint),
            buyer_token_account: ata(buyer, mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::BuyFreeAccessTicket {
            nonce,
            quantity,
            payment,
        },
    )
}

pub fn withdraw_free_access_ix(owner: &Pubkey, mint: &Pubkey, nonce: u64, quantity: u64) -> Instruction {
    instruction(
        accounts::WithdrawFreeAccessTicketsAccountConstraints {
            owner: *owner,
            mint: *mint,
            listing: FreeAccessListing::address(mint, owner, nonce).0,
            platform: platform(),
            vault: vault(mint),
            owner_token_account: ata(owner, mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        },
        ix::WithdrawFreeAccessTickets { nonce, quantity },
    )
}

/// Fails unless the transaction was rejected with one of our error codes.
pub fn assert_program_error(result: Result<(), BanksClientError>, code: ErrorCode) {
    let expected = ERROR_CODE_OFFSET + code as u32;
    match result.unwrap_err().unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(actual)) => {
            assert_eq!(actual, expected)
        }
        other => panic!("expected custom error {expected}, got {other:?}"),
    }
}

pub struct Harness {
    pub context: ProgramTestContext,
}

impl Harness {
    /// Boots a bank with the program and an initialized platform.
    pub async fn start() -> Self {
        let program_test = ProgramTest::new(
            "ticketing_platform",
            ticketing_platform::ID,
            processor!(process_instruction),
        );
        let mut harness = Self {
            context: program_test.start_with_context().await,
        };
        let authority = harness.payer();
        harness.send(&[initialize_ix(&authority)], &[]).await.unwrap();
        harness
    }

    pub fn payer(&self) -> Pubkey {
        self.context.payer.pubkey()
    }

    /// The context payer covers fees, so `signers` only move their own funds.
    pub async fn send(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let transaction = self.transaction(instructions, signers);
        self.context.banks_client.process_transaction(transaction).await
    }

    fn transaction(&self, instructions: &[Instruction], signers: &[&Keypair]) -> Transaction {
        let mut keypairs = vec![&self.context.payer];
        keypairs.extend_from_slice(signers);
        Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            keypairs.as_slice(),
            self.context.last_blockhash,
        )
    }

    pub async fn funded_user(&mut self) -> Keypair {
        let user = Keypair::new();
        let transfer = system_instruction::transfer(&self.payer(), &user.pubkey(), USER_FUNDS);
        self.send(&[transfer], &[]).await.unwrap();
        user
    }

    pub async fn rent(&mut self) -> Rent {
        self.context.banks_client.get_rent().await.unwrap()
    }

    pub async fn lamports(&mut self, address: &Pubkey) -> u64 {
        self.context.banks_client.get_balance(*address).await.unwrap()
    }

    pub async fn exists(&mut self, address: &Pubkey) -> bool {
        self.context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .map(|account| account.lamports > 0)
            .unwrap_or(false)
    }

    pub async fn load<T: AccountDeserialize>(&mut self, address: &Pubkey) -> T {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();
        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn token_amount(&mut self, address: &Pubkey) -> u64 {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();
        spl_token::state::Account::unpack(&account.data).unwrap().amount
    }

    pub async fn mint_state(&mut self, mint: &Pubkey) -> spl_token::state::Mint {
        let account = self
            .context
            .banks_client
            .get_account(*mint)
            .await
            .unwrap()
            .unwrap();
        spl_token::state::Mint::unpack(&account.data).unwrap()
    }

    /// Creates a plain SPL mint and gives `owner` the whole supply.
    pub async fn create_mint(&mut self, owner: &Keypair, decimals: u8, supply: u64) -> Pubkey {
        let mint = Keypair::new();
        let rent = self.rent().await;
        let instructions = [
            system_instruction::create_account(
                &owner.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &token::ID,
            ),
            spl_token::instruction::initialize_mint2(
                &token::ID,
                &mint.pubkey(),
                &owner.pubkey(),
                None,
                decimals,
            )
            .unwrap(),
            create_ata_ix(&owner.pubkey(), &owner.pubkey(), &mint.pubkey()),
            spl_token::instruction::mint_to(
                &token::ID,
                &mint.pubkey(),
                &ata(&owner.pubkey(), &mint.pubkey()),
                &owner.pubkey(),
                &[],
                supply,
            )
            .unwrap(),
        ];
        self.send(&instructions, &[owner, &mint]).await.unwrap();
        mint.pubkey()
    }

    /// Mints a unique ticket through the program.
    pub async fn mint_ticket(&mut self, issuer: &Keypair, name: &str) -> Pubkey {
        let mint = Keypair::new();
        let instruction = mint_ticket_ix(
            &issuer.pubkey(),
            &mint.pubkey(),
            name,
            "https://tickets.example.com/show/1",
        );
        self.send(&[instruction], &[issuer, &mint]).await.unwrap();
        mint.pubkey()
    }

    pub async fn opt_in(&mut self, payer: &Keypair, mint: &Pubkey) {
        self.send(&[opt_in_ix(&payer.pubkey(), mint)], &[payer])
            .await
            .unwrap();
    }

    /// Seller with a freshly minted ticket listed at `price`.
    pub async fn listed_ticket(&mut self, price: u64) -> (Keypair, Pubkey) {
        let seller = self.funded_user().await;
        let mint = self.mint_ticket(&seller, "General Admission").await;
        self.opt_in(&seller, &mint).await;
        self.send(&[new_listing_ix(&seller.pubkey(), &mint, price)], &[&seller])
            .await
            .unwrap();
        (seller, mint)
    }

    /// Seller holding `supply` fungible tickets, `quantity` of them listed.
    pub async fn listed_batch(
        &mut self,
        supply: u64,
        quantity: u64,
        unitary_price: u64,
        nonce: u64,
    ) -> (Keypair, Pubkey) {
        let seller = self.funded_user().await;
        let mint = self.create_mint(&seller, 2, supply).await;
        self.opt_in(&seller, &mint).await;
        let listing = new_listing_free_access_ix(&seller.pubkey(), &mint, quantity, unitary_price, nonce);
        self.send(&[listing], &[&seller]).await.unwrap();
        (seller, mint)
    }

    pub async fn listings_open(&mut self) -> u64 {
        self.load::<Platform>(&platform()).await.listings_open
    }

    /// Reads the `bool` returned by `is_opted_in_to` from a simulation.
    pub async fn is_opted_in_to(&mut self, mint: &Pubkey) -> bool {
        let transaction = self.transaction(&[is_opted_in_ix(mint, &vault(mint))], &[]);
        let simulation = self
            .context
            .banks_client
            .simulate_transaction(transaction)
            .await
            .unwrap();
        simulation.result.unwrap().unwrap();
        simulation
            .simulation_details
            .and_then(|details| details.return_data)
            .map(|return_data| return_data.data.first() == Some(&1))
            .unwrap_or(false)
    }
}
