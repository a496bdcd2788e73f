pub mod scenery;
