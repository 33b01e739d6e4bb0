pub mod infinity_logo;
