pub mod d400_metrics;
