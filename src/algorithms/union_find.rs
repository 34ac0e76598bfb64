/// Disjoint sets over `0..n` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
	parent: Vec<usize>,
	rank: Vec<u8>,
}

impl UnionFind {
	/// `n` singleton sets.
	pub fn new(n: usize) -> Self {
		Self {
			parent: (0..n).collect(),
			rank: vec![0; n],
		}
	}

	/// Representative of the set containing `x`.
	pub fn find(&mut self, x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		let mut node = x;
		while self.parent[node] != root {
			let next = self.parent[node];
			self.parent[node] = root;
			node = next;
		}
		root
	}

	/// Merge the sets of `a` and `b`. Returns `false` if they were already one.
	pub fn union(&mut self, a: usize, b: usize) -> bool {
		let (ra, rb) = (self.find(a), self.find(b));
		if ra == rb {
			return false;
		}
		match self.rank[ra].cmp(&self.rank[rb]) {
			std::cmp::Ordering::Less => self.parent[ra] = rb,
			std::cmp::Ordering::Greater => self.parent[rb] = ra,
			std::cmp::Ordering::Equal => {
				self.parent[rb] = ra;
				self.rank[ra] += 1;
			}
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_union_and_find() {
		let mut uf = UnionFind::new(5);
		assert!(uf.union(0, 1));
		assert!(uf.union(2, 3));
		assert!(!uf.union(1, 0));
		assert_ne!(uf.find(0), uf.find(2));
		assert!(uf.union(1, 3));
		assert_eq!(uf.find(0), uf.find(2));
		assert_eq!(uf.find(4), 4);
	}

	#[test]
	fn test_find_compresses_paths() {
		let mut uf = UnionFind::new(4);
		uf.union(0, 1);
		uf.union(2, 3);
		uf.union(0, 2);
		let root = uf.find(3);
		assert!(uf.parent.iter().all(|&p| p == root || uf.parent[p] == p));
		assert_eq!(uf.parent[3], root);
	}
}
