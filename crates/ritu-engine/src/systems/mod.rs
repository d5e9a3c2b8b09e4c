pub mod forces;
