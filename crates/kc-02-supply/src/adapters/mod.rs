pub mod memory_bank;
