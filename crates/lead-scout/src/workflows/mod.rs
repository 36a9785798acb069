pub mod prospecting;
