#![allow(dead_code)]

use anchor_lang::prelude::{AccountInfo, Pubkey, Rent};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::system_program::System;
use anchor_lang::{AccountDeserialize, AccountSerialize, Id, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Token, TokenAccount};
use pnl_pack::{accounts, instruction, pda, GlobalPackPool, PackTickers};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::{Account, AccountSharedData};
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

/// One whole token at the six decimals every test mint uses.
pub const UNIT: u64 = 1_000_000;
pub const DECIMALS: u8 = 6;

/// `SystemError::AccountAlreadyInUse`, what `init` reports for an existing account.
pub const ACCOUNT_ALREADY_IN_USE: u32 = 0;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // `entry` wants the slice to live as long as the accounts it holds.
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    pnl_pack::entry(program_id, accounts, data)
}

pub fn custom_code(err: BanksClientError) -> u32 {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("expected a custom instruction error, got {other:?}"),
    }
}

pub fn tickers(names: [&str; 4]) -> PackTickers {
    let [a, b, c, d] = names.map(String::from);
    PackTickers::new(a, b, c, d)
}

pub fn pack_address(names: [&str; 4]) -> Pubkey {
    pda::pack_address(&pnl_pack::ID, &tickers(names)).unwrap().0
}

pub fn holding(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    pda::holding_address(owner, mint, &Token::id())
}

fn build(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: pnl_pack::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

fn pool_account(authority: Pubkey, bump: u8) -> Account {
    let pool = GlobalPackPool {
        authority,
        total_kols: 50,
        vault_count: 0,
        pack_count: 0,
        bump,
    };
    let mut data = Vec::with_capacity(GlobalPackPool::LEN);
    pool.try_serialize(&mut data).unwrap();
    data.resize(GlobalPackPool::LEN, 0);

    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: pnl_pack::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// A running bank with the program loaded natively.
///
/// `ADMIN_KEY` has no usable secret here, so pool-backed harnesses write the
/// pool account directly with `admin` as its recorded authority.
pub struct Harness {
    pub ctx: ProgramTestContext,
    pub admin: Keypair,
    pub pool: Pubkey,
}

impl Harness {
    pub async fn with_pool() -> Self {
        Self::start(true).await
    }

    pub async fn without_pool() -> Self {
        Self::start(false).await
    }

    async fn start(seed_pool: bool) -> Self {
        let mut program_test = ProgramTest::new("pnl_pack", pnl_pack::ID, processor!(process_instruction));
        program_test.prefer_bpf(false);

        let admin = Keypair::new();
        program_test.add_account(
            admin.pubkey(),
            Account::new(100 * LAMPORTS_PER_SOL, 0, &System::id()),
        );

        let (pool, bump) = pda::pool_address(&pnl_pack::ID).unwrap();
        if seed_pool {
            program_test.add_account(pool, pool_account(admin.pubkey(), bump));
        }

        let ctx = program_test.start_with_context().await;
        Self { ctx, admin, pool }
    }

    pub fn admin(&self) -> Keypair {
        self.admin.insecure_clone()
    }

    pub fn funded_keypair(&mut self, sol: u64) -> Keypair {
        let keypair = Keypair::new();
        self.ctx.set_account(
            &keypair.pubkey(),
            &AccountSharedData::new(sol * LAMPORTS_PER_SOL, 0, &System::id()),
        );
        keypair
    }

    pub async fn send(&mut self, instruction: Instruction, signers: &[&Keypair]) -> Result<(), BanksClientError> {
        let blockhash = self.ctx.get_new_latest_blockhash().await.unwrap();
        let mut all_signers = vec![&self.ctx.payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.ctx.payer.pubkey()),
            &all_signers,
            blockhash,
        );
        self.ctx.banks_client.process_transaction(tx).await
    }

    pub async fn exists(&mut self, address: Pubkey) -> bool {
        self.ctx.banks_client.get_account(address).await.unwrap().is_some()
    }

    pub async fn lamports(&mut self, address: Pubkey) -> u64 {
        self.ctx.banks_client.get_balance(address).await.unwrap()
    }

    pub async fn fetch<T: AccountDeserialize>(&mut self, address: Pubkey) -> T {
        let account = self
            .ctx
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("account {address} does not exist"));
        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn token_balance(&mut self, address: Pubkey) -> u64 {
        self.fetch::<TokenAccount>(address).await.amount
    }

    pub fn vault(&self, ticker: &str) -> Pubkey {
        pda::vault_address(&pnl_pack::ID, ticker, &self.pool).unwrap().0
    }

    pub fn token_vault(&self, ticker: &str) -> Pubkey {
        pda::token_vault_address(&pnl_pack::ID, ticker, &self.pool).unwrap().0
    }

    pub async fn initialize_pool(&mut self, signer: &Keypair, total_kols: u8) -> Result<(), BanksClientError> {
        let ix = build(
            accounts::InitializePool {
                pool: self.pool,
                authority: signer.pubkey(),
                system_program: System::id(),
            },
            instruction::InitializePool { total_kols },
        );
        self.send(ix, &[signer]).await
    }

    pub async fn deposit(&mut self, depositor: &Keypair, amount: u64) -> Result<(), BanksClientError> {
        let ix = build(
            accounts::Deposit {
                pool: self.pool,
                depositor: depositor.pubkey(),
                system_program: System::id(),
            },
            instruction::Deposit { amount },
        );
        self.send(ix, &[depositor]).await
    }

    /// Runs `mint_and_init_vault_and_transfer` with a fresh mint and returns it.
    pub async fn provision(
        &mut self,
        signer: &Keypair,
        ticker: &str,
        total_supply: u64,
        vault_allocation: u64,
    ) -> Result<Pubkey, BanksClientError> {
        let mint = Keypair::new();
        let ix = build(
            accounts::MintAndInitVaultAndTransfer {
                pool: self.pool,
                authority: signer.pubkey(),
                mint: mint.pubkey(),
                authority_token_account: holding(&signer.pubkey(), &mint.pubkey()),
                vault: self.vault(ticker),
                token_vault: self.token_vault(ticker),
                system_program: System::id(),
                token_program: Token::id(),
                associated_token_program: AssociatedToken::id(),
            },
            instruction::MintAndInitVaultAndTransfer {
                ticker: ticker.to_string(),
                decimals: DECIMALS,
                total_supply,
                vault_allocation,
            },
        );
        self.send(ix, &[signer, &mint]).await?;
        Ok(mint.pubkey())
    }

    pub async fn init_vault(&mut self, signer: &Keypair, ticker: &str, mint: Pubkey) -> Result<(), BanksClientError> {
        let ix = build(
            accounts::InitVault {
                pool: self.pool,
                authority: signer.pubkey(),
                mint,
                vault: self.vault(ticker),
                token_vault: self.token_vault(ticker),
                system_program: System::id(),
                token_program: Token::id(),
            },
            instruction::InitVault {
                ticker: ticker.to_string(),
            },
        );
        self.send(ix, &[signer]).await
    }

    pub async fn transfer_to_vault(
        &mut self,
        signer: &Keypair,
        ticker: &str,
        mint: Pubkey,
        amount: u64,
    ) -> Result<(), BanksClientError> {
        let ix = build(
            accounts::TransferToVault {
                pool: self.pool,
                authority: signer.pubkey(),
                vault: self.vault(ticker),
                mint,
                source: holding(&signer.pubkey(), &mint),
                token_vault: self.token_vault(ticker),
                token_program: Token::id(),
            },
            instruction::TransferToVault {
                ticker: ticker.to_string(),
                amount,
            },
        );
        self.send(ix, &[signer]).await
    }

    pub async fn create_pack(
        &mut self,
        signer: &Keypair,
        names: [&str; 4],
        mints: [Pubkey; 4],
    ) -> Result<Pubkey, BanksClientError> {
        let pack = pack_address(names);
        let [kol_a, kol_b, kol_c, kol_d] = names.map(String::from);
        let ix = build(
            accounts::CreatePack {
                pool: self.pool,
                authority: signer.pubkey(),
                pack,
                mint_a: mints[0],
                mint_b: mints[1],
                mint_c: mints[2],
                mint_d: mints[3],
                pack_token_a: holding(&pack, &mints[0]),
                pack_token_b: holding(&pack, &mints[1]),
                pack_token_c: holding(&pack, &mints[2]),
                pack_token_d: holding(&pack, &mints[3]),
                system_program: System::id(),
                token_program: Token::id(),
                associated_token_program: AssociatedToken::id(),
            },
            instruction::CreatePack {
                kol_a,
                kol_b,
                kol_c,
                kol_d,
            },
        );
        self.send(ix, &[signer]).await?;
        Ok(pack)
    }

    pub async fn fund_pack(
        &mut self,
        signer: &Keypair,
        pack: Pubkey,
        ticker: &str,
        mint: Pubkey,
        amount: u64,
    ) -> Result<(), BanksClientError> {
        let ix = build(
            accounts::FundPack {
                pool: self.pool,
                authority: signer.pubkey(),
                pack,
                vault: self.vault(ticker),
                mint,
                token_vault: self.token_vault(ticker),
                pack_token_account: holding(&pack, &mint),
                token_program: Token::id(),
            },
            instruction::FundPack {
                ticker: ticker.to_string(),
                amount,
            },
        );
        self.send(ix, &[signer]).await
    }

    /// Claims from `pack`, naming the tickers in `names` order. `mints` follow
    /// the pack's own order so only the ticker tuple can be wrong.
    pub async fn claim(
        &mut self,
        claimant: &Keypair,
        pack: Pubkey,
        names: [&str; 4],
        mints: [Pubkey; 4],
        amount_per_kol: u64,
    ) -> Result<(), BanksClientError> {
        let owner = claimant.pubkey();
        let [kol_a, kol_b, kol_c, kol_d] = names.map(String::from);
        let ix = build(
            accounts::ClaimFromPack {
                pack,
                claimant: owner,
                mint_a: mints[0],
                mint_b: mints[1],
                mint_c: mints[2],
                mint_d: mints[3],
                pack_token_a: holding(&pack, &mints[0]),
                pack_token_b: holding(&pack, &mints[1]),
                pack_token_c: holding(&pack, &mints[2]),
                pack_token_d: holding(&pack, &mints[3]),
                claimant_token_a: holding(&owner, &mints[0]),
                claimant_token_b: holding(&owner, &mints[1]),
                claimant_token_c: holding(&owner, &mints[2]),
                claimant_token_d: holding(&owner, &mints[3]),
                system_program: System::id(),
                token_program: Token::id(),
                associated_token_program: AssociatedToken::id(),
            },
            instruction::ClaimFromPack {
                kol_a,
                kol_b,
                kol_c,
                kol_d,
                amount_per_kol,
            },
        );
        self.send(ix, &[claimant]).await
    }

    pub async fn holdings(&mut self, owner: Pubkey, mints: [Pubkey; 4]) -> [u64; 4] {
        let mut balances = [0; 4];
        for (balance, mint) in balances.iter_mut().zip(mints) {
            *balance = self.token_balance(holding(&owner, &mint)).await;
        }
        balances
    }
}
