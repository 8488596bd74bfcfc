//! # Condensing a small symmetric system
//!
//! Builds a symmetric matrix of dimension three from the six values of its upper triangle and
//! eliminates the first row and column.
use relp_num::{RB, RationalBig};

use symblock::symmetric_block_matrix;

fn main() {
    let matrix = symmetric_block_matrix![3;
        RB!(1), RB!(2), RB!(3),
                RB!(4), RB!(5),
                        RB!(6),
    ];
    println!("Matrix:\n{}", matrix);

    let condensed = match matrix.condense::<0>() {
        Ok(condensed) => condensed,
        Err(error) => {
            eprintln!("Couldn't condense: {}", error);
            std::process::exit(1);
        },
    };
    println!("Condensed:\n{}", condensed);

    let block: &RationalBig = condensed.get_block::<0, 0>();
    println!("Block (0, 0): {}", block);
}
