pub mod xorshift;
