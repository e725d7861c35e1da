//! Admin reports API

use shared::models::{AdminAnalytics, AdminOverview, AdminReport};

use super::read;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct AdminApi<'a> {
    q: &'a QueryClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn overview(&self) -> Query<'a, AdminOverview> {
        read(self.q, Tag::AdminReport, ApiRequest::get("/admin/overview"))
    }

    pub fn analytics(&self) -> Query<'a, AdminAnalytics> {
        read(self.q, Tag::AdminReport, ApiRequest::get("/admin/analytics"))
    }

    pub fn reports(&self) -> Query<'a, AdminReport> {
        read(self.q, Tag::AdminReport, ApiRequest::get("/admin/reports"))
    }
}
