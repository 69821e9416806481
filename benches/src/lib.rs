pub mod context;
#[cfg(test)]
mod tests;
