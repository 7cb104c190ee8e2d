// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use gax::operation::{BodyRule, NDJSON, Operation, PathVariant, Verb, VerbRule};

pub static BULK: Operation = Operation::new(
    "bulk",
    &[PathVariant::new("/{index}/_bulk"), PathVariant::new("/_bulk")],
)
.with_verb(Verb::Post)
.with_query(&[
    "pipeline",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "timeout",
    "wait_for_active_shards",
    "require_alias",
    "require_data_stream",
])
.with_body(BodyRule::Required)
.with_content_type(NDJSON);

pub static CLEAR_SCROLL: Operation =
    Operation::new("clear_scroll", &[PathVariant::new("/_search/scroll")])
        .with_verb(Verb::Delete)
        .with_body(BodyRule::Optional);

pub static CLOSE_POINT_IN_TIME: Operation =
    Operation::new("close_point_in_time", &[PathVariant::new("/_pit")])
        .with_verb(Verb::Delete)
        .with_body(BodyRule::Required);

pub static COUNT: Operation = Operation::new(
    "count",
    &[
        PathVariant::new("/{index}/_count"),
        PathVariant::new("/_count"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(&[
    "allow_no_indices",
    "analyzer",
    "analyze_wildcard",
    "default_operator",
    "df",
    "expand_wildcards",
    "ignore_throttled",
    "ignore_unavailable",
    "lenient",
    "min_score",
    "preference",
    "routing",
    "terminate_after",
    "q",
])
.with_body(BodyRule::Optional);

pub static CREATE: Operation =
    Operation::new("create", &[PathVariant::new("/{index}/_create/{id}")])
        .with_verb(Verb::Put)
        .with_required(&["id", "index"])
        .with_query(&[
            "pipeline",
            "refresh",
            "routing",
            "timeout",
            "version",
            "version_type",
            "wait_for_active_shards",
        ])
        .with_body(BodyRule::Required);

pub static DELETE: Operation = Operation::new("delete", &[PathVariant::new("/{index}/_doc/{id}")])
    .with_verb(Verb::Delete)
    .with_required(&["id", "index"])
    .with_query(&[
        "if_primary_term",
        "if_seq_no",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "wait_for_active_shards",
    ]);

const BY_QUERY: &[&str] = &[
    "allow_no_indices",
    "analyzer",
    "analyze_wildcard",
    "conflicts",
    "default_operator",
    "df",
    "expand_wildcards",
    "from",
    "ignore_unavailable",
    "lenient",
    "max_docs",
    "preference",
    "refresh",
    "request_cache",
    "requests_per_second",
    "routing",
    "q",
    "scroll",
    "scroll_size",
    "search_timeout",
    "search_type",
    "slices",
    "sort",
    "stats",
    "terminate_after",
    "timeout",
    "version",
    "wait_for_active_shards",
    "wait_for_completion",
];

pub static DELETE_BY_QUERY: Operation = Operation::new(
    "delete_by_query",
    &[PathVariant::new("/{index}/_delete_by_query")],
)
.with_verb(Verb::Post)
.with_required(&["index"])
.with_query(BY_QUERY)
.with_body(BodyRule::Required);

pub static DELETE_SCRIPT: Operation =
    Operation::new("delete_script", &[PathVariant::new("/_scripts/{id}")])
        .with_verb(Verb::Delete)
        .with_required(&["id"])
        .with_query(&["master_timeout", "timeout"]);

const GET_QUERY: &[&str] = &[
    "force_synthetic_source",
    "preference",
    "realtime",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "stored_fields",
    "version",
    "version_type",
];

pub static EXISTS: Operation = Operation::new("exists", &[PathVariant::new("/{index}/_doc/{id}")])
    .with_verb(Verb::Head)
    .with_required(&["id", "index"])
    .with_query(GET_QUERY);

pub static EXISTS_SOURCE: Operation =
    Operation::new("exists_source", &[PathVariant::new("/{index}/_source/{id}")])
        .with_verb(Verb::Head)
        .with_required(&["id", "index"])
        .with_query(&[
            "preference",
            "realtime",
            "refresh",
            "routing",
            "_source",
            "_source_excludes",
            "_source_includes",
            "version",
            "version_type",
        ]);

pub static EXPLAIN: Operation =
    Operation::new("explain", &[PathVariant::new("/{index}/_explain/{id}")])
        .with_verb_rule(VerbRule::BodyConditional)
        .with_required(&["id", "index"])
        .with_query(&[
            "analyzer",
            "analyze_wildcard",
            "default_operator",
            "df",
            "lenient",
            "preference",
            "routing",
            "_source",
            "_source_excludes",
            "_source_includes",
            "stored_fields",
            "q",
        ])
        .with_body(BodyRule::Optional);

pub static FIELD_CAPS: Operation = Operation::new(
    "field_caps",
    &[
        PathVariant::new("/{index}/_field_caps"),
        PathVariant::new("/_field_caps"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "fields",
    "ignore_unavailable",
    "include_unmapped",
    "filters",
    "types",
    "include_empty_fields",
])
.with_body(BodyRule::Optional);

pub static GET: Operation = Operation::new("get", &[PathVariant::new("/{index}/_doc/{id}")])
    .with_required(&["id", "index"])
    .with_query(GET_QUERY);

pub static GET_SCRIPT: Operation =
    Operation::new("get_script", &[PathVariant::new("/_scripts/{id}")])
        .with_required(&["id"])
        .with_query(&["master_timeout"]);

pub static GET_SOURCE: Operation =
    Operation::new("get_source", &[PathVariant::new("/{index}/_source/{id}")])
        .with_required(&["id", "index"])
        .with_query(&[
            "preference",
            "realtime",
            "refresh",
            "routing",
            "_source",
            "_source_excludes",
            "_source_includes",
            "stored_fields",
            "version",
            "version_type",
        ]);

pub static INDEX: Operation = Operation::new(
    "index",
    &[
        PathVariant::new("/{index}/_doc/{id}").with_verb(Verb::Put),
        PathVariant::new("/{index}/_doc").with_verb(Verb::Post),
    ],
)
.with_verb(Verb::Post)
.with_required(&["index"])
.with_query(&[
    "if_primary_term",
    "if_seq_no",
    "op_type",
    "pipeline",
    "refresh",
    "routing",
    "timeout",
    "version",
    "version_type",
    "wait_for_active_shards",
    "require_alias",
])
.with_body(BodyRule::Required);

pub static INFO: Operation = Operation::new("info", &[PathVariant::new("/")]);

pub static MGET: Operation = Operation::new(
    "mget",
    &[PathVariant::new("/{index}/_mget"), PathVariant::new("/_mget")],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(&[
    "force_synthetic_source",
    "preference",
    "realtime",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "stored_fields",
])
.with_body(BodyRule::Optional);

pub static MSEARCH: Operation = Operation::new(
    "msearch",
    &[
        PathVariant::new("/{index}/_msearch"),
        PathVariant::new("/_msearch"),
    ],
)
.with_verb(Verb::Post)
.with_query(&[
    "allow_no_indices",
    "ccs_minimize_roundtrips",
    "expand_wildcards",
    "ignore_throttled",
    "ignore_unavailable",
    "include_named_queries_score",
    "max_concurrent_searches",
    "max_concurrent_shard_requests",
    "pre_filter_shard_size",
    "rest_total_hits_as_int",
    "routing",
    "search_type",
    "typed_keys",
])
.with_body(BodyRule::Required)
.with_content_type(NDJSON);

pub static MSEARCH_TEMPLATE: Operation = Operation::new(
    "msearch_template",
    &[
        PathVariant::new("/{index}/_msearch/template"),
        PathVariant::new("/_msearch/template"),
    ],
)
.with_verb(Verb::Post)
.with_query(&[
    "ccs_minimize_roundtrips",
    "max_concurrent_searches",
    "search_type",
    "rest_total_hits_as_int",
    "typed_keys",
])
.with_body(BodyRule::Required)
.with_content_type(NDJSON);

const TERMVECTORS_QUERY: &[&str] = &[
    "fields",
    "field_statistics",
    "offsets",
    "payloads",
    "positions",
    "preference",
    "realtime",
    "routing",
    "term_statistics",
    "version",
    "version_type",
];

pub static MTERMVECTORS: Operation = Operation::new(
    "mtermvectors",
    &[
        PathVariant::new("/{index}/_mtermvectors"),
        PathVariant::new("/_mtermvectors"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(&[
    "ids",
    "fields",
    "field_statistics",
    "offsets",
    "payloads",
    "positions",
    "preference",
    "realtime",
    "routing",
    "term_statistics",
    "version",
    "version_type",
])
.with_body(BodyRule::Optional);

pub static OPEN_POINT_IN_TIME: Operation =
    Operation::new("open_point_in_time", &[PathVariant::new("/{index}/_pit")])
        .with_verb(Verb::Post)
        .with_required(&["index", "keep_alive"])
        .with_query(&[
            "keep_alive",
            "ignore_unavailable",
            "preference",
            "routing",
            "expand_wildcards",
            "allow_partial_search_results",
        ])
        .with_body(BodyRule::Optional);

pub static PING: Operation = Operation::new("ping", &[PathVariant::new("/")]).with_verb(Verb::Head);

pub static PUT_SCRIPT: Operation = Operation::new(
    "put_script",
    &[
        PathVariant::new("/_scripts/{id}/{context}"),
        PathVariant::new("/_scripts/{id}"),
    ],
)
.with_verb(Verb::Put)
.with_required(&["id"])
.with_query(&["master_timeout", "timeout"])
.with_body(BodyRule::Required);

pub static RANK_EVAL: Operation = Operation::new(
    "rank_eval",
    &[
        PathVariant::new("/{index}/_rank_eval"),
        PathVariant::new("/_rank_eval"),
    ],
)
.with_verb(Verb::Post)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "ignore_unavailable",
    "search_type",
])
.with_body(BodyRule::Required);

pub static REINDEX: Operation = Operation::new("reindex", &[PathVariant::new("/_reindex")])
    .with_verb(Verb::Post)
    .with_query(&[
        "refresh",
        "requests_per_second",
        "scroll",
        "slices",
        "timeout",
        "wait_for_active_shards",
        "wait_for_completion",
        "require_alias",
    ])
    .with_body(BodyRule::Required);

pub static RENDER_SEARCH_TEMPLATE: Operation = Operation::new(
    "render_search_template",
    &[
        PathVariant::new("/_render/template/{id}"),
        PathVariant::new("/_render/template"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_body(BodyRule::Optional);

pub static SCRIPTS_PAINLESS_EXECUTE: Operation = Operation::new(
    "scripts_painless_execute",
    &[PathVariant::new("/_scripts/painless/_execute")],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_body(BodyRule::Optional);

pub static SCROLL: Operation = Operation::new("scroll", &[PathVariant::new("/_search/scroll")])
    .with_verb_rule(VerbRule::BodyConditional)
    .with_query(&["scroll", "scroll_id", "rest_total_hits_as_int"])
    .with_body(BodyRule::Optional);

/// The query parameters of `search`, also used by `async_search.submit`.
const SEARCH_QUERY: &[&str] = &[
    "allow_no_indices",
    "allow_partial_search_results",
    "analyzer",
    "analyze_wildcard",
    "batched_reduce_size",
    "ccs_minimize_roundtrips",
    "default_operator",
    "df",
    "docvalue_fields",
    "expand_wildcards",
    "explain",
    "ignore_throttled",
    "ignore_unavailable",
    "include_named_queries_score",
    "lenient",
    "max_concurrent_shard_requests",
    "preference",
    "pre_filter_shard_size",
    "request_cache",
    "routing",
    "scroll",
    "search_type",
    "stats",
    "stored_fields",
    "suggest_field",
    "suggest_mode",
    "suggest_size",
    "suggest_text",
    "terminate_after",
    "timeout",
    "track_total_hits",
    "track_scores",
    "typed_keys",
    "rest_total_hits_as_int",
    "version",
    "_source",
    "_source_excludes",
    "_source_includes",
    "seq_no_primary_term",
    "q",
    "size",
    "from",
    "sort",
    "force_synthetic_source",
];

pub static SEARCH: Operation = Operation::new(
    "search",
    &[
        PathVariant::new("/{index}/_search"),
        PathVariant::new("/_search"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(SEARCH_QUERY)
.with_body(BodyRule::Optional);

/// The media type of the `search_mvt` responses.
pub const MAPBOX_VECTOR_TILE: &str = "application/vnd.mapbox-vector-tile";

pub static SEARCH_MVT: Operation = Operation::new(
    "search_mvt",
    &[PathVariant::new("/{index}/_mvt/{field}/{zoom}/{x}/{y}")],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_required(&["index", "field", "zoom", "x", "y"])
.with_query(&[
    "exact_bounds",
    "extent",
    "grid_agg",
    "grid_precision",
    "grid_type",
    "size",
    "track_total_hits",
    "with_labels",
])
.with_body(BodyRule::Optional)
.with_accept(MAPBOX_VECTOR_TILE)
.with_content_type(gax::operation::JSON);

pub static SEARCH_TEMPLATE: Operation = Operation::new(
    "search_template",
    &[
        PathVariant::new("/{index}/_search/template"),
        PathVariant::new("/_search/template"),
    ],
)
.with_verb(Verb::Post)
.with_query(&[
    "allow_no_indices",
    "ccs_minimize_roundtrips",
    "expand_wildcards",
    "explain",
    "ignore_throttled",
    "ignore_unavailable",
    "preference",
    "profile",
    "routing",
    "scroll",
    "search_type",
    "rest_total_hits_as_int",
    "typed_keys",
])
.with_body(BodyRule::Required);

pub static TERMS_ENUM: Operation =
    Operation::new("terms_enum", &[PathVariant::new("/{index}/_terms_enum")])
        .with_verb_rule(VerbRule::BodyConditional)
        .with_required(&["index"])
        .with_body(BodyRule::Optional);

pub static TERMVECTORS: Operation = Operation::new(
    "termvectors",
    &[
        PathVariant::new("/{index}/_termvectors/{id}"),
        PathVariant::new("/{index}/_termvectors"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_required(&["index"])
.with_query(TERMVECTORS_QUERY)
.with_body(BodyRule::Optional);

pub static UPDATE: Operation = Operation::new("update", &[PathVariant::new("/{index}/_update/{id}")])
    .with_verb(Verb::Post)
    .with_required(&["id", "index"])
    .with_query(&[
        "if_primary_term",
        "if_seq_no",
        "lang",
        "refresh",
        "require_alias",
        "retry_on_conflict",
        "routing",
        "timeout",
        "wait_for_active_shards",
        "_source",
        "_source_excludes",
        "_source_includes",
    ])
    .with_body(BodyRule::Required);

pub static UPDATE_BY_QUERY: Operation = Operation::new(
    "update_by_query",
    &[PathVariant::new("/{index}/_update_by_query")],
)
.with_verb(Verb::Post)
.with_required(&["index"])
.with_query(&[
    "allow_no_indices",
    "analyzer",
    "analyze_wildcard",
    "conflicts",
    "default_operator",
    "df",
    "expand_wildcards",
    "from",
    "ignore_unavailable",
    "lenient",
    "max_docs",
    "pipeline",
    "preference",
    "refresh",
    "request_cache",
    "requests_per_second",
    "routing",
    "q",
    "scroll",
    "scroll_size",
    "search_timeout",
    "search_type",
    "slices",
    "sort",
    "stats",
    "terminate_after",
    "timeout",
    "version",
    "version_type",
    "wait_for_active_shards",
    "wait_for_completion",
])
.with_body(BodyRule::Optional);

/// All the operations in the root namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &BULK,
    &CLEAR_SCROLL,
    &CLOSE_POINT_IN_TIME,
    &COUNT,
    &CREATE,
    &DELETE,
    &DELETE_BY_QUERY,
    &DELETE_SCRIPT,
    &EXISTS,
    &EXISTS_SOURCE,
    &EXPLAIN,
    &FIELD_CAPS,
    &GET,
    &GET_SCRIPT,
    &GET_SOURCE,
    &INDEX,
    &INFO,
    &MGET,
    &MSEARCH,
    &MSEARCH_TEMPLATE,
    &MTERMVECTORS,
    &OPEN_POINT_IN_TIME,
    &PING,
    &PUT_SCRIPT,
    &RANK_EVAL,
    &REINDEX,
    &RENDER_SEARCH_TEMPLATE,
    &SCRIPTS_PAINLESS_EXECUTE,
    &SCROLL,
    &SEARCH,
    &SEARCH_MVT,
    &SEARCH_TEMPLATE,
    &TERMS_ENUM,
    &TERMVECTORS,
    &UPDATE,
    &UPDATE_BY_QUERY,
];
