//! Text-format parsing for gift catalogues and region lists.
//!
//! The input is a sequence of blank-line-separated blocks. Every block except
//! the last is a gift: a `N:` header line followed by rows of `#`/`.` cells.
//! The last block holds one region per line in the form `WxH: c0 c1 ...`,
//! where `c_i` is the required count of gift `i`; missing trailing counts
//! mean zero.

use crate::error::Error;
use crate::pieces::{Gift, Region};

/// Parses a full input file into the gift catalogue and the region list.
///
/// Gift headers must count up from zero in block order so the catalogue can
/// be indexed directly by gift id.
pub fn parse_input(input: &str) -> Result<(Vec<Gift>, Vec<Region>), Error> {
    let blocks: Vec<&str> = input
        .split("\n\n")
        .map(str::trim_end)
        .filter(|block| !block.trim().is_empty())
        .collect();

    let Some((&region_block, gift_blocks)) = blocks.split_last() else {
        return Ok((Vec::new(), Vec::new()));
    };

    let gifts = gift_blocks
        .iter()
        .enumerate()
        .map(|(id, block)| parse_gift(id, block))
        .collect::<Result<Vec<_>, _>>()?;

    let regions = region_block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(id, line)| parse_region(id, line))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("parsed {} gifts and {} regions", gifts.len(), regions.len());
    Ok((gifts, regions))
}

/// Parses one gift block into a catalogue entry.
fn parse_gift(id: usize, block: &str) -> Result<Gift, Error> {
    let mut lines = block.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::MalformedGift(block.to_string()))?;

    let header_id: usize = header
        .trim()
        .trim_end_matches(':')
        .parse()
        .map_err(|_| Error::MalformedGift(header.to_string()))?;
    if header_id != id {
        return Err(Error::MalformedGift(format!(
            "gift header {header_id} out of order, expected {id}"
        )));
    }

    let rows: Vec<&str> = lines.collect();
    Gift::new(id, &rows)
}

/// Parses one `WxH: c0 c1 ...` region line.
fn parse_region(id: usize, line: &str) -> Result<Region, Error> {
    let malformed = || Error::MalformedRegion(line.to_string());

    let (dimensions, counts) = line.split_once(':').ok_or_else(malformed)?;
    let (width, height) = dimensions.trim().split_once('x').ok_or_else(malformed)?;

    let width: i32 = width.trim().parse().map_err(|_| malformed())?;
    let height: i32 = height.trim().parse().map_err(|_| malformed())?;
    if width <= 0 || height <= 0 {
        return Err(malformed());
    }

    let must_fit = counts
        .split_whitespace()
        .map(|count| count.parse::<usize>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Region::new(id, width, height, must_fit))
}
