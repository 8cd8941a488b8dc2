pub mod conic;
