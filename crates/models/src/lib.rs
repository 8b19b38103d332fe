pub mod errors;
pub mod db;
pub mod persona;

#[cfg(test)]
mod tests;
