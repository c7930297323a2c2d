//! Well-known namespace IRIs
//!
//! Constants are full IRIs so callers can compare against store contents
//! without string building.

/// RDF core vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// ODRL 2.2 vocabulary (http://www.w3.org/ns/odrl/2/)
pub mod odrl {
    pub const NS: &str = "http://www.w3.org/ns/odrl/2/";

    pub const POLICY: &str = "http://www.w3.org/ns/odrl/2/Policy";
    pub const SET: &str = "http://www.w3.org/ns/odrl/2/Set";
    pub const REQUEST: &str = "http://www.w3.org/ns/odrl/2/Request";
    pub const PERMISSION: &str = "http://www.w3.org/ns/odrl/2/permission";
    pub const PROHIBITION: &str = "http://www.w3.org/ns/odrl/2/prohibition";
    pub const UID: &str = "http://www.w3.org/ns/odrl/2/uid";
    pub const ASSIGNEE: &str = "http://www.w3.org/ns/odrl/2/assignee";
    pub const ASSIGNER: &str = "http://www.w3.org/ns/odrl/2/assigner";
    pub const ACTION: &str = "http://www.w3.org/ns/odrl/2/action";
    pub const TARGET: &str = "http://www.w3.org/ns/odrl/2/target";
    pub const CONSTRAINT: &str = "http://www.w3.org/ns/odrl/2/constraint";
}

/// Dublin Core terms (http://purl.org/dc/terms/)
pub mod dct {
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}

/// XML Schema datatypes (http://www.w3.org/2001/XMLSchema#)
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// FOAF (http://xmlns.com/foaf/0.1/)
pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
}

/// Example resources used by sample policies (http://example.org/)
pub mod ex {
    pub const NS: &str = "http://example.org/";
}

/// Request-scoped temporary resources (http://example.com/request/)
pub mod temp {
    pub const NS: &str = "http://example.com/request/";

    pub const CURRENT_TIME: &str = "http://example.com/request/currentTime";
}
