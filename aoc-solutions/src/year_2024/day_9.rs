use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Disk Fragmenter: compact a dense disk map and checksum the result
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 9, tags = ["simulation"])]
pub struct Solver;

impl AocParser for Solver {
    /// Alternating file and free-space lengths
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as usize)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("non-digit {c:?} in disk map")))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks: Vec<Option<usize>> = shared
            .iter()
            .enumerate()
            .flat_map(|(i, &len)| {
                let id = (i % 2 == 0).then_some(i / 2);
                std::iter::repeat_n(id, len)
            })
            .collect();

        let (mut front, mut back) = (0, blocks.len());
        loop {
            while front < back && blocks[front].is_some() {
                front += 1;
            }
            while back > front && blocks[back - 1].is_none() {
                back -= 1;
            }
            if back <= front + 1 {
                break;
            }
            blocks.swap(front, back - 1);
        }

        let checksum: usize = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| pos * id))
            .sum();
        Ok(checksum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut files = Vec::new();
        let mut gaps = Vec::new();
        let mut pos = 0;
        for (i, &len) in shared.iter().enumerate() {
            let span = Span { start: pos, len };
            if i % 2 == 0 {
                files.push(span);
            } else {
                gaps.push(span);
            }
            pos += len;
        }

        // Each file moves at most once, highest id first, into the leftmost gap that fits.
        for file in files.iter_mut().rev() {
            if let Some(gap) = gaps
                .iter_mut()
                .take_while(|g| g.start < file.start)
                .find(|g| g.len >= file.len)
            {
                file.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
        }

        let checksum: usize = files
            .iter()
            .enumerate()
            .map(|(id, f)| (f.start..f.start + f.len).sum::<usize>() * id)
            .sum();
        Ok(checksum.to_string())
    }
}
