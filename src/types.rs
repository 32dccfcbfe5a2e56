pub type MatchId = String;
pub type Puuid = String;
pub type SummonerId = String;
