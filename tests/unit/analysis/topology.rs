//! Tests for passage extraction and spanning tree checks

#[cfg(test)]
mod tests {
    use mazecarve::MazeError;
    use mazecarve::algorithm::generator::get_maze;
    use mazecarve::algorithm::random::SeededRandom;
    use mazecarve::analysis::{MazeTopology, Passage};
    use mazecarve::spatial::{Grid, Position};

    fn open_ring() -> Grid {
        let mut grid = Grid::new(2, 2);
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();
        grid.cell_mut(Position::new(1, 1)).remove_left_wall();
        grid.cell_mut(Position::new(0, 0)).remove_top_wall();
        grid.cell_mut(Position::new(1, 0)).remove_top_wall();
        grid
    }

    // Tests an untouched grid has no passages and is disconnected
    #[test]
    fn test_fresh_grid_is_disconnected() {
        let topology = MazeTopology::from_grid(&Grid::new(3, 2));

        assert_eq!(topology.cell_count(), 6);
        assert_eq!(topology.broken_walls(), 0);
        assert_eq!(topology.first_unreachable(), Some(Position::new(1, 0)));
        assert!(topology.passages().is_empty());
        assert!(!topology.is_connected());
        assert!(topology.is_acyclic());
        assert!(!topology.is_perfect());
    }

    // Tests passages are recorded with the owning cell first
    // Verified by pairing the owner with the wrong neighbour direction
    #[test]
    fn test_passages_link_owner_and_neighbour() {
        let mut grid = Grid::new(2, 2);
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();
        grid.cell_mut(Position::new(0, 0)).remove_top_wall();

        let topology = MazeTopology::from_grid(&grid);
        assert_eq!(
            topology.passages(),
            &[
                Passage {
                    owner: Position::new(0, 0),
                    neighbour: Position::new(0, 1),
                },
                Passage {
                    owner: Position::new(1, 0),
                    neighbour: Position::new(0, 0),
                },
            ]
        );
        assert_eq!(topology.first_unreachable(), Some(Position::new(1, 1)));
    }

    // Tests a loop of four passages is detected
    // Verified by skipping the union step in the cycle check
    #[test]
    fn test_ring_is_cyclic() {
        let topology = MazeTopology::from_grid(&open_ring());

        assert_eq!(topology.broken_walls(), 4);
        assert!(topology.is_connected());
        assert!(!topology.is_acyclic());
        assert!(!topology.is_perfect());
        match topology.verify() {
            Err(MazeError::InvalidMaze { reason }) => {
                assert!(reason.contains("4 passages for 4 cells"));
            }
            other => unreachable!("Expected InvalidMaze, got {other:?}"),
        }
    }

    // Tests a loop can hide a cut-off cell when the passage count is right
    // Verified by checking connectivity with the passage count alone
    #[test]
    fn test_loop_with_isolated_column_names_unreachable_cell() {
        let mut grid = Grid::new(3, 2);
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();
        grid.cell_mut(Position::new(1, 1)).remove_left_wall();
        grid.cell_mut(Position::new(0, 0)).remove_top_wall();
        grid.cell_mut(Position::new(1, 0)).remove_top_wall();
        grid.cell_mut(Position::new(2, 0)).remove_top_wall();

        let topology = MazeTopology::from_grid(&grid);
        assert_eq!(topology.passages().len(), 5);
        assert!(!topology.is_connected());
        assert!(!topology.is_acyclic());
        assert_eq!(topology.first_unreachable(), Some(Position::new(2, 0)));

        match topology.verify() {
            Err(MazeError::InvalidMaze { reason }) => {
                assert_eq!(reason, "cell (2, 0) is unreachable from (0, 0)");
            }
            other => unreachable!("Expected InvalidMaze, got {other:?}"),
        }
    }

    // Tests outer walls cleared by mistake are counted, not linked
    #[test]
    fn test_boundary_breaks() {
        let mut grid = Grid::new(2, 1);
        grid.cell_mut(Position::new(0, 0)).remove_left_wall();
        grid.cell_mut(Position::new(1, 0)).remove_top_wall();
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();

        let topology = MazeTopology::from_grid(&grid);
        assert_eq!(topology.boundary_breaks(), 2);
        assert_eq!(topology.passages().len(), 1);
        assert_eq!(topology.broken_walls(), 3);
        assert!(!topology.is_perfect());
        assert!(topology.verify().is_err());
    }

    #[test]
    fn test_reachability() {
        let mut grid = Grid::new(3, 1);
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();

        let topology = MazeTopology::from_grid(&grid);
        let reached = topology.reachable_from(0);
        assert_eq!(reached.count_ones(), 2);
        assert_eq!(reached.get(2).as_deref(), Some(&false));
        assert_eq!(topology.reachable_from(10).count_ones(), 0);

        match topology.verify() {
            Err(MazeError::InvalidMaze { reason }) => {
                assert!(reason.contains("1 passages for 3 cells"));
            }
            other => unreachable!("Expected InvalidMaze, got {other:?}"),
        }
    }

    // Tests a carved maze passes every check
    #[test]
    fn test_carved_maze_is_perfect() {
        let mut random = SeededRandom::new(31);
        let maze = get_maze(17, 11, 8, 5, &mut random);
        let topology = MazeTopology::from_grid(&maze);

        assert_eq!(topology.passages().len(), 17 * 11 - 1);
        assert_eq!(topology.boundary_breaks(), 0);
        assert!(topology.is_perfect());
        assert_eq!(topology.first_unreachable(), None);
        assert!(topology.verify().is_ok());
    }

    #[test]
    fn test_single_cell_is_trivially_perfect() {
        let topology = MazeTopology::from_grid(&Grid::new(1, 1));
        assert!(topology.is_perfect());
        assert!(topology.verify().is_ok());
    }
}
