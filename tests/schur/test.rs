use relp_num::RB;

use symblock::{BlockError, DenseBlock, MatrixError, MixedBlock, SymmetricBlockMatrix};
use symblock::symmetric_block_matrix;

use crate::schur::{dense, schur_complement, select};

#[test]
fn driver() {
    let matrix = symmetric_block_matrix![3;
        1_f64, 2_f64, 3_f64,
               4_f64, 5_f64,
                      6_f64,
    ];
    let condensed = matrix.condense::<0>().unwrap();

    assert_eq!(condensed.dimension(), 2);
    assert_eq!(*condensed.get_block::<0, 0>(), 0_f64);
}

#[test]
fn condense_to_single_block() {
    // det = 64, det of the leading 2x2 = 16
    let matrix = symmetric_block_matrix![3;
        RB!(4), RB!(2), RB!(2),
                RB!(5), RB!(3),
                        RB!(6),
    ];

    let first = matrix.condense::<0>().unwrap();
    assert_eq!(first.clone().into_blocks(), vec![RB!(4), RB!(2), RB!(5)]);
    let last = first.condense::<0>().unwrap();
    assert_eq!(*last.get_block::<0, 0>(), RB!(4));

    // det of the principal sub-matrix without row and column 1 is 20
    let other_order = matrix.condense::<2>().unwrap().condense::<0>().unwrap();
    assert_eq!(*other_order.get_block::<0, 0>(), RB!(16, 5));
}

#[test]
fn scalar_against_assembled() {
    let rows: &[&[i32]] = &[
        &[10, 1, 2, 0, 3],
        &[1, 8, 0, 1, 0],
        &[2, 0, 9, 2, 1],
        &[0, 1, 2, 7, 1],
        &[3, 0, 1, 1, 6],
    ];
    let assembled = dense(rows);
    let upper = (0..5)
        .flat_map(|i| (i..5).map(move |j| RB!(rows[i][j])))
        .collect::<Vec<_>>();
    let matrix = SymmetricBlockMatrix::<_, 5>::try_from_blocks(upper).unwrap();

    for pivot in 0..5 {
        let condensed = matrix.condense_at(pivot).unwrap();
        let expected = schur_complement(&assembled, &[pivot]);
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(condensed.block_transposed(row, column).unwrap(), expected[(row, column)]);
            }
        }
    }
}

#[test]
fn dense_blocks_against_assembled() {
    // Block sizes 2, 1, 2
    let assembled = dense(&[
        &[6, 1, 1, 0, 2],
        &[1, 5, 0, 1, 0],
        &[1, 0, 4, 1, 1],
        &[0, 1, 1, 7, 2],
        &[2, 0, 1, 2, 8],
    ]);
    let matrix = symmetric_block_matrix![3;
        dense(&[&[6, 1], &[1, 5]]), dense(&[&[1], &[0]]), dense(&[&[0, 2], &[1, 0]]),
                                    dense(&[&[4]]),       dense(&[&[1, 1]]),
                                                          dense(&[&[7, 2], &[2, 8]]),
    ];

    let condensed = matrix.condense::<0>().unwrap();
    let expected = schur_complement(&assembled, &[0, 1]);
    assert_eq!(*condensed.get_block::<0, 0>(), select(&expected, &[0], &[0]));
    assert_eq!(*condensed.get_block::<0, 1>(), select(&expected, &[0], &[1, 2]));
    assert_eq!(*condensed.get_block::<1, 1>(), select(&expected, &[1, 2], &[1, 2]));

    let condensed = matrix.condense::<1>().unwrap();
    let expected = schur_complement(&assembled, &[2]);
    assert_eq!(*condensed.get_block::<0, 0>(), select(&expected, &[0, 1], &[0, 1]));
    assert_eq!(*condensed.get_block::<0, 1>(), select(&expected, &[0, 1], &[2, 3]));
    assert_eq!(*condensed.get_block::<1, 1>(), select(&expected, &[2, 3], &[2, 3]));
}

#[test]
fn mixed_blocks() {
    let matrix = symmetric_block_matrix![3;
        MixedBlock::Scalar(RB!(2)), MixedBlock::Dense(dense(&[&[1, 0]])), MixedBlock::Scalar(RB!(1)),
                                    MixedBlock::Dense(dense(&[&[4, 1], &[1, 4]])), MixedBlock::Dense(dense(&[&[1], &[1]])),
                                                                                  MixedBlock::Scalar(RB!(3)),
    ];
    let condensed = matrix.condense::<0>().unwrap();

    // [4 1; 1 4] - [1; 0] 1/2 [1 0]
    assert_eq!(
        *condensed.get_block::<0, 0>(),
        MixedBlock::Dense(DenseBlock::from_rows(vec![
            vec![RB!(7, 2), RB!(1)],
            vec![RB!(1), RB!(4)],
        ]).unwrap()),
    );
    // [1; 1] - [1; 0] 1/2 1
    assert_eq!(
        *condensed.get_block::<0, 1>(),
        MixedBlock::Dense(dense(&[&[1], &[2]]).scale(&RB!(1, 2))),
    );
    // 3 - 1 1/2 1
    assert_eq!(*condensed.get_block::<1, 1>(), MixedBlock::Scalar(RB!(5, 2)));
}

#[test]
fn singular_pivot() {
    let matrix = symmetric_block_matrix![2;
        dense(&[&[1, 1], &[1, 1]]), dense(&[&[1], &[2]]),
                                    dense(&[&[3]]),
    ];

    assert_eq!(matrix.condense::<0>(), Err(MatrixError::Algebra(BlockError::Singular)));
    assert!(matrix.condense::<1>().is_ok());
}
