mod elements;
mod export;
