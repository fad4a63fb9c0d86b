use bezier_spin::{BinomialTable, SpinError};

#[test]
fn rows_have_expected_shape_symmetry_and_sum() {
    let table = BinomialTable::new(19).unwrap();
    assert_eq!(table.levels(), 19);
    for n in 1..=19usize {
        let row = table.row(n).unwrap();
        assert_eq!(row.len(), n + 1);
        for i in 0..=n {
            assert_eq!(row[i], row[n - i], "row {n} not symmetric at {i}");
        }
        assert_eq!(row.iter().sum::<u64>(), 1u64 << n);
        assert_eq!((row[0], row[n]), (1, 1));
    }
}

#[test]
fn known_rows_match_pascal_triangle() {
    let table = BinomialTable::new(6).unwrap();
    assert_eq!(table.row(1).unwrap(), &[1, 1]);
    assert_eq!(table.row(2).unwrap(), &[1, 2, 1]);
    assert_eq!(table.row(4).unwrap(), &[1, 4, 6, 4, 1]);
    assert_eq!(table.row(6).unwrap(), &[1, 6, 15, 20, 15, 6, 1]);
}

#[test]
fn out_of_range_rows_fail_instead_of_clamping() {
    let table = BinomialTable::new(3).unwrap();
    assert_eq!(table.row(0).err(), Some(SpinError::RowOutOfRange { n: 0, max: 3 }));
    assert_eq!(table.row(4).err(), Some(SpinError::RowOutOfRange { n: 4, max: 3 }));
    assert!(table.row(3).is_ok());
}

#[test]
fn rejects_empty_and_overflowing_tables() {
    assert!(matches!(BinomialTable::new(0), Err(SpinError::InvalidInput(_))));
    assert!(matches!(BinomialTable::new(68), Err(SpinError::InvalidInput(_))));
    let widest = BinomialTable::new(67).unwrap();
    assert_eq!(widest.row(67).unwrap()[33], 14_226_520_737_620_288_370);
}
