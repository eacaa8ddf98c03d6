use solo_battleship::{BitBoard, BitBoardError};

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    // setting twice is a no-op
    bb.set(1, 1).unwrap();
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(
        bb.get(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert!(bb.set(0, 10).is_err());
    assert!(bb.is_empty());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_contains_all_and_ops() {
    let ship = BitBoard::<u128, 10>::from_cells([(2, 2), (2, 3)]).unwrap();
    let mut hits = BitBoard::<u128, 10>::from_cells([(2, 2)]).unwrap();
    assert!(!hits.contains_all(&ship));
    hits |= BitBoard::from_cells([(2, 3), (9, 9)]).unwrap();
    assert!(hits.contains_all(&ship));
    assert_eq!((hits & ship), ship);
    assert_eq!((ship | hits).count_ones(), 3);
}
