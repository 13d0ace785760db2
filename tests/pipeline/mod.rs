mod filter;
mod identification;
