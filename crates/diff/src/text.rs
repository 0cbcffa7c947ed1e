//! String diff algorithm: Myers O(ND) difference algorithm.
//!
//! All length/position values are in **Unicode scalar values** (Rust `char`s),
//! not bytes. Callers that re-interpret the spans against structured content
//! must count in `char`s as well.

// ── Types ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOpType {
    Del = -1,
    Eql = 0,
    Ins = 1,
}

pub type PatchOperation = (PatchOpType, String);
pub type Patch = Vec<PatchOperation>;

/// Working representation while the diff is being computed.
type Span = (PatchOpType, Vec<char>);

// ── Public utilities ──────────────────────────────────────────────────────

/// Merge consecutive operations of the same type; discard empty operations.
pub fn normalize(patch: Patch) -> Patch {
    let mut result: Patch = Vec::with_capacity(patch.len());
    for (op_type, text) in patch {
        if text.is_empty() {
            continue;
        }
        match result.last_mut() {
            Some(last) if last.0 == op_type => last.1.push_str(&text),
            _ => result.push((op_type, text)),
        }
    }
    result
}

/// Number of chars in the common prefix of `txt1` and `txt2`.
pub fn pfx(txt1: &str, txt2: &str) -> usize {
    txt1.chars().zip(txt2.chars()).take_while(|(a, b)| a == b).count()
}

/// Number of chars in the common suffix of `txt1` and `txt2`.
pub fn sfx(txt1: &str, txt2: &str) -> usize {
    txt1.chars()
        .rev()
        .zip(txt2.chars().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Compute the diff between `src` and `dst` strings.
///
/// Returns a list of patch operations. EQL operations are included for
/// context, so the DEL+EQL spans concatenate to `src` and the INS+EQL spans
/// concatenate to `dst`.
pub fn diff(src: &str, dst: &str) -> Patch {
    let src: Vec<char> = src.chars().collect();
    let dst: Vec<char> = dst.chars().collect();
    let mut spans: Vec<Span> = Vec::new();
    diff_chars(&src, &dst, &mut spans);
    cleanup_merge(spans)
}

/// Reconstruct the source string from a patch.
pub fn patch_src(patch: &Patch) -> String {
    patch
        .iter()
        .filter(|(op_type, _)| *op_type != PatchOpType::Ins)
        .map(|(_, txt)| txt.as_str())
        .collect()
}

/// Reconstruct the destination string from a patch.
pub fn patch_dst(patch: &Patch) -> String {
    patch
        .iter()
        .filter(|(op_type, _)| *op_type != PatchOpType::Del)
        .map(|(_, txt)| txt.as_str())
        .collect()
}

// ── Internal helpers (char-slice based) ──────────────────────────────────

fn common_prefix(c1: &[char], c2: &[char]) -> usize {
    c1.iter().zip(c2).take_while(|(a, b)| a == b).count()
}

fn common_suffix(c1: &[char], c2: &[char]) -> usize {
    c1.iter()
        .rev()
        .zip(c2.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Find the first occurrence of `needle` in `haystack`, returning the starting index.
fn find_char_slice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn push_span(out: &mut Vec<Span>, op_type: PatchOpType, text: &[char]) {
    if !text.is_empty() {
        out.push((op_type, text.to_vec()));
    }
}

// ── Core diff algorithm ───────────────────────────────────────────────────

fn diff_chars(src: &[char], dst: &[char], out: &mut Vec<Span>) {
    if src == dst {
        push_span(out, PatchOpType::Eql, src);
        return;
    }

    let prefix_len = common_prefix(src, dst);
    let (prefix, src, dst) = (&src[..prefix_len], &src[prefix_len..], &dst[prefix_len..]);

    let suffix_len = common_suffix(src, dst);
    let suffix = &src[src.len() - suffix_len..];
    let src = &src[..src.len() - suffix_len];
    let dst = &dst[..dst.len() - suffix_len];

    push_span(out, PatchOpType::Eql, prefix);
    diff_no_common_affix(src, dst, out);
    push_span(out, PatchOpType::Eql, suffix);
}

fn diff_no_common_affix(c1: &[char], c2: &[char], out: &mut Vec<Span>) {
    if c1.is_empty() {
        push_span(out, PatchOpType::Ins, c2);
        return;
    }
    if c2.is_empty() {
        push_span(out, PatchOpType::Del, c1);
        return;
    }

    // Shorter text fully contained in the longer one.
    let (long, short, edit) = if c1.len() > c2.len() {
        (c1, c2, PatchOpType::Del)
    } else {
        (c2, c1, PatchOpType::Ins)
    };
    if let Some(idx) = find_char_slice(long, short) {
        push_span(out, edit, &long[..idx]);
        push_span(out, PatchOpType::Eql, short);
        push_span(out, edit, &long[idx + short.len()..]);
        return;
    }

    if short.len() == 1 {
        push_span(out, PatchOpType::Del, c1);
        push_span(out, PatchOpType::Ins, c2);
        return;
    }

    bisect(c1, c2, out);
}

/// Find the middle snake of the two texts and recurse on both halves.
fn bisect(c1: &[char], c2: &[char], out: &mut Vec<Span>) {
    let n1 = c1.len() as i64;
    let n2 = c2.len() as i64;
    let max_d = (n1 + n2 + 1) / 2 + 1;
    let v_offset = max_d;
    let v_length = 2 * max_d;

    let mut v1: Vec<i64> = vec![-1; v_length as usize];
    let mut v2: Vec<i64> = vec![-1; v_length as usize];
    v1[(v_offset + 1) as usize] = 0;
    v2[(v_offset + 1) as usize] = 0;

    let delta = n1 - n2;
    // Odd delta: the forward path will collide with the reverse path.
    let front = delta % 2 != 0;

    let mut k1start = 0i64;
    let mut k1end = 0i64;
    let mut k2start = 0i64;
    let mut k2end = 0i64;

    for d in 0..max_d {
        // Walk the front path one step.
        let mut k1 = -d + k1start;
        while k1 <= d - k1end {
            let k1_offset = v_offset + k1;
            let mut x1 = if k1 == -d
                || (k1 != d && v1[(k1_offset - 1) as usize] < v1[(k1_offset + 1) as usize])
            {
                v1[(k1_offset + 1) as usize]
            } else {
                v1[(k1_offset - 1) as usize] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n1 && y1 < n2 && c1[x1 as usize] == c2[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset as usize] = x1;
            if x1 > n1 {
                // Ran off the right of the graph.
                k1end += 2;
            } else if y1 > n2 {
                // Ran off the bottom of the graph.
                k1start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if k2_offset >= 0 && k2_offset < v_length && v2[k2_offset as usize] != -1 {
                    let x2 = n1 - v2[k2_offset as usize];
                    if x1 >= x2 {
                        bisect_split(c1, c2, x1 as usize, y1 as usize, out);
                        return;
                    }
                }
            }
            k1 += 2;
        }

        // Walk the reverse path one step.
        let mut k2 = -d + k2start;
        while k2 <= d - k2end {
            let k2_offset = v_offset + k2;
            let mut x2 = if k2 == -d
                || (k2 != d && v2[(k2_offset - 1) as usize] < v2[(k2_offset + 1) as usize])
            {
                v2[(k2_offset + 1) as usize]
            } else {
                v2[(k2_offset - 1) as usize] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n1
                && y2 < n2
                && c1[(n1 - x2 - 1) as usize] == c2[(n2 - y2 - 1) as usize]
            {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset as usize] = x2;
            if x2 > n1 {
                k2end += 2;
            } else if y2 > n2 {
                k2start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if k1_offset >= 0 && k1_offset < v_length && v1[k1_offset as usize] != -1 {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    if x1 >= n1 - x2 {
                        bisect_split(c1, c2, x1 as usize, y1 as usize, out);
                        return;
                    }
                }
            }
            k2 += 2;
        }
    }

    // No commonality at all.
    push_span(out, PatchOpType::Del, c1);
    push_span(out, PatchOpType::Ins, c2);
}

fn bisect_split(c1: &[char], c2: &[char], x: usize, y: usize, out: &mut Vec<Span>) {
    diff_chars(&c1[..x], &c2[..y], out);
    diff_chars(&c1[x..], &c2[y..], out);
}

// ── cleanup_merge ─────────────────────────────────────────────────────────

/// Collapse each run of edits between two equalities into at most one
/// deletion followed by one insertion, moving any text the two share at
/// either end into the neighbouring equalities.
fn cleanup_merge(spans: Vec<Span>) -> Patch {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    let mut del: Vec<char> = Vec::new();
    let mut ins: Vec<char> = Vec::new();

    // The trailing empty equality flushes the last run of edits.
    let sentinel = (PatchOpType::Eql, Vec::new());
    for (op_type, text) in spans.into_iter().chain(std::iter::once(sentinel)) {
        match op_type {
            PatchOpType::Del => del.extend(text),
            PatchOpType::Ins => ins.extend(text),
            PatchOpType::Eql => {
                let mut eql = text;
                if !del.is_empty() && !ins.is_empty() {
                    let common = common_prefix(&ins, &del);
                    if common > 0 {
                        push_eql(&mut merged, &ins[..common]);
                        ins.drain(..common);
                        del.drain(..common);
                    }
                    let common = common_suffix(&ins, &del);
                    if common > 0 {
                        let mut moved = ins.split_off(ins.len() - common);
                        moved.extend(eql);
                        eql = moved;
                        del.truncate(del.len() - common);
                    }
                }
                if !del.is_empty() {
                    merged.push((PatchOpType::Del, std::mem::take(&mut del)));
                }
                if !ins.is_empty() {
                    merged.push((PatchOpType::Ins, std::mem::take(&mut ins)));
                }
                push_eql(&mut merged, &eql);
            }
        }
    }

    merged
        .into_iter()
        .map(|(op_type, text)| (op_type, text.into_iter().collect()))
        .collect()
}

fn push_eql(out: &mut Vec<Span>, text: &[char]) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some((PatchOpType::Eql, last)) => last.extend_from_slice(text),
        _ => out.push((PatchOpType::Eql, text.to_vec())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
