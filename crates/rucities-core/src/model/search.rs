// crates/rucities-core/src/model/search.rs
use super::flat::{Page, PlaceRecord, RecordStore};
use crate::common::DbStats;
use crate::compare::CityComparison;
use crate::error::Result;
use crate::text::fold_key;
use crate::traits::{CitySearch, GeoBackend};
use crate::{lookup, paginate, resolve};

impl<B: GeoBackend> CitySearch<B> for RecordStore<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            records: self.size(),
            aliases: self.alias_count(),
            first_id: self.first_id(),
            last_id: self.last_id(),
        }
    }

    fn find_by_id(&self, id: i64) -> Result<&PlaceRecord<B>> {
        lookup::find_by_id(self, id)
    }

    fn page(&self, page_number: usize, page_size: usize) -> Result<Page<'_, B>> {
        paginate::page(self, page_number, page_size)
    }

    fn total_pages(&self, page_size: usize) -> Result<usize> {
        paginate::total_pages(self, page_size)
    }

    fn resolve_by_name(&self, name: &str) -> Result<&PlaceRecord<B>> {
        resolve::resolve_by_name(self, name)
    }

    fn compare_by_names<'a>(
        &'a self,
        first: &str,
        second: &str,
    ) -> Result<CityComparison<'a, B>> {
        let a = resolve::resolve_by_name(self, first)?;
        let b = resolve::resolve_by_name(self, second)?;
        Ok(CityComparison::new(a, b))
    }

    fn find_by_substring(&self, query: &str, limit: usize) -> Vec<&PlaceRecord<B>> {
        let q = fold_key(query.trim());
        if q.is_empty() || limit == 0 {
            return Vec::new();
        }

        // Linear scan over the pre-folded keys; results stay in id order.
        self.records
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.search_keys_at(*pos).iter().any(|k| k.contains(&q)))
            .map(|(_, r)| r)
            .take(limit)
            .collect()
    }
}
