pub mod errors;
pub mod db;
pub mod article;

#[cfg(test)]
mod tests;
