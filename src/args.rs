use clap::{Parser, ValueEnum};

use mcrypt_interop::RUNS;

#[derive(Parser, Debug)]
#[command(version, about, author)]
pub struct Cli {
    /// Number of trials. Each trial checks cbc, cfb, ctr, ecb, ncfb, and nofb.
    #[arg(short = 'n', long = "runs", default_value_t = RUNS)]
    pub runs: usize,

    /// Key size used for every trial.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits128,
    )]
    pub key_size: KeySize,

    /// Draw a new key and IV for every trial instead of once per run.
    #[arg(long = "fresh-keys")]
    pub fresh_keys: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for mcrypt_interop::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => mcrypt_interop::KeySize::Bits128,
            KeySize::Bits192 => mcrypt_interop::KeySize::Bits192,
            KeySize::Bits256 => mcrypt_interop::KeySize::Bits256,
        }
    }
}
