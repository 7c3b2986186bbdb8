
#[derive(Debug)]
pub enum GridError {
    Empty, // Grid has no rows at all
    NotSquare { row: usize, len: usize, rows: usize }, // Row length differs from the row count
    NegativeWeight { row: usize, col: usize }, // Weights must be non-negative
}

#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error), // File missing or unreadable
    BadToken { line: usize, token: String }, // Cell value that does not parse as a weight
    Shape(GridError), // Parsed rows do not form a valid grid
}

#[derive(Debug)]
pub enum SolveError {
    NoPathFound // Reconstruction could not walk back to the start cell
}


impl From<GridError> for SourceError {
    fn from(error: GridError) -> Self {
        SourceError::Shape(error)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(error: std::io::Error) -> Self {
        SourceError::Io(error)
    }
}
