use clap::{ArgAction, Parser};
use crate::query_class::QueryClass;
use crate::query_type::QueryType;

#[derive(Parser, Debug, Default)]
#[command(about, version)]
pub struct Args {
    /// Domain name to query
    pub domain: String,
    /// Servers to query in order, as `ip` or `ip:port`
    #[arg(long, short, value_delimiter = ',')]
    pub server: Option<Vec<String>>,
    /// Port used for servers given without one
    #[arg(long, short)]
    pub port: Option<u16>,
    /// Per-server timeout, e.g. `5s` or `500ms`
    #[arg(long, short)]
    pub timeout: Option<String>,
    #[arg(long, short)]
    pub qtype: Option<QueryType>,
    #[arg(long, short = 'c')]
    pub qclass: Option<QueryClass>,
    /// Fixed query id
    #[arg(long, conflicts_with = "random_id")]
    pub id: Option<u16>,
    #[arg(long, short = 'r', default_value_t = false)]
    pub random_id: bool,
    /// Set the RD flag
    #[arg(long, short = 'R', default_value_t = false)]
    pub recurse: bool,
    #[arg(long, short = 'C')]
    pub config: Option<String>,
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "dnsq", "-s", "1.1.1.1,9.9.9.9:5353", "-q", "aaaa", "-R", "-vv", "example.com",
        ])
        .unwrap();

        assert_eq!(args.domain, "example.com");
        assert_eq!(
            args.server,
            Some(vec!["1.1.1.1".to_string(), "9.9.9.9:5353".to_string()])
        );
        assert_eq!(args.qtype, Some(QueryType::AAAA));
        assert!(args.recurse);
        assert_eq!(args.verbose, 2);

        let args = Args::try_parse_from(["dnsq", "-s", "1.1.1.1", "example.com"]).unwrap();
        assert_eq!(args.domain, "example.com");
        assert_eq!(args.server, Some(vec!["1.1.1.1".to_string()]));
    }

    #[test]
    fn id_conflicts_with_random_id() {
        assert!(Args::try_parse_from(["dnsq", "--id", "7", "-r", "example.com"]).is_err());
        assert!(Args::try_parse_from(["dnsq"]).is_err());
    }
}
