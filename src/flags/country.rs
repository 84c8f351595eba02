crate::define_flags! {
    /// Country restriction flags for the `cr` query parameter.
    pub CountryCode(CountryCodeTable) {
        afghanistan => "countryAF",
        albania => "countryAL",
        algeria => "countryDZ",
        american_samoa => "countryAS",
        andorra => "countryAD",
        angola => "countryAO",
        anguilla => "countryAI",
        antarctica => "countryAQ",
        antigua_and_barbuda => "countryAG",
        argentina => "countryAR",
        armenia => "countryAM",
        aruba => "countryAW",
        australia => "countryAU",
        austria => "countryAT",
        azerbaijan => "countryAZ",
        bahamas => "countryBS",
        bahrain => "countryBH",
        bangladesh => "countryBD",
        barbados => "countryBB",
        belarus => "countryBY",
        belgium => "countryBE",
        belize => "countryBZ",
        benin => "countryBJ",
        bermuda => "countryBM",
        bhutan => "countryBT",
        bolivia => "countryBO",
        bosnia_and_herzegovina => "countryBA",
        botswana => "countryBW",
        bouvet_island => "countryBV",
        brazil => "countryBR",
        british_indian_ocean_territory => "countryIO",
        brunei_darussalam => "countryBN",
        bulgaria => "countryBG",
        burkina_faso => "countryBF",
        burundi => "countryBI",
        cambodia => "countryKH",
        cameroon => "countryCM",
        canada => "countryCA",
        cape_verde => "countryCV",
        cayman_islands => "countryKY",
        central_african_republic => "countryCF",
        chad => "countryTD",
        chile => "countryCL",
        china => "countryCN",
        christmas_island => "countryCX",
        cocos_keeling_islands => "countryCC",
        colombia => "countryCO",
        comoros => "countryKM",
        congo => "countryCG",
        _the_democratic_republic_of_the_congo => "countryCD",
        cook_islands => "countryCK",
        costa_rica => "countryCR",
        cote_divoire => "countryCI",
        croatia_hrvatska => "countryHR",
        cuba => "countryCU",
        cyprus => "countryCY",
        czech_republic => "countryCZ",
        denmark => "countryDK",
        djibouti => "countryDJ",
        dominica => "countryDM",
        dominican_republic => "countryDO",
        east_timor => "countryTP",
        ecuador => "countryEC",
        egypt => "countryEG",
        el_salvador => "countrySV",
        equatorial_guinea => "countryGQ",
        eritrea => "countryER",
        estonia => "countryEE",
        ethiopia => "countryET",
        european_union => "countryEU",
        falkland_islands_malvinas => "countryFK",
        faroe_islands => "countryFO",
        fiji => "countryFJ",
        finland => "countryFI",
        france => "countryFR",
        _metropolitan_france => "countryFX",
        french_guiana => "countryGF",
        french_polynesia => "countryPF",
        french_southern_territories => "countryTF",
        gabon => "countryGA",
        gambia => "countryGM",
        georgia => "countryGE",
        germany => "countryDE",
        ghana => "countryGH",
        gibraltar => "countryGI",
        greece => "countryGR",
        greenland => "countryGL",
        grenada => "countryGD",
        guadeloupe => "countryGP",
        guam => "countryGU",
        guatemala => "countryGT",
        guinea => "countryGN",
        guinea_bissau => "countryGW",
        guyana => "countryGY",
        haiti => "countryHT",
        heard_island_and_mcdonald_islands => "countryHM",
        holy_see_vatican_city_state => "countryVA",
        honduras => "countryHN",
        hong_kong => "countryHK",
        hungary => "countryHU",
        iceland => "countryIS",
        india => "countryIN",
        indonesia => "countryID",
        _islamic_republic_of_iran => "countryIR",
        iraq => "countryIQ",
        ireland => "countryIE",
        israel => "countryIL",
        italy => "countryIT",
        jamaica => "countryJM",
        japan => "countryJP",
        jordan => "countryJO",
        kazakhstan => "countryKZ",
        kenya => "countryKE",
        kiribati => "countryKI",
        _democratic_peoples_republic_of_korea => "countryKP",
        _republic_of_korea => "countryKR",
        kuwait => "countryKW",
        kyrgyzstan => "countryKG",
        lao_peoples_democratic_republic => "countryLA",
        latvia => "countryLV",
        lebanon => "countryLB",
        lesotho => "countryLS",
        liberia => "countryLR",
        libyan_arab_jamahiriya => "countryLY",
        liechtenstein => "countryLI",
        lithuania => "countryLT",
        luxembourg => "countryLU",
        macao => "countryMO",
        _the_former_yugosalv_republic_of_macedonia => "countryMK",
        madagascar => "countryMG",
        malawi => "countryMW",
        malaysia => "countryMY",
        maldives => "countryMV",
        mali => "countryML",
        malta => "countryMT",
        marshall_islands => "countryMH",
        martinique => "countryMQ",
        mauritania => "countryMR",
        mauritius => "countryMU",
        mayotte => "countryYT",
        mexico => "countryMX",
        _federated_states_of_micronesia => "countryFM",
        _republic_of_moldova => "countryMD",
        monaco => "countryMC",
        mongolia => "countryMN",
        montserrat => "countryMS",
        morocco => "countryMA",
        mozambique => "countryMZ",
        myanmar => "countryMM",
        namibia => "countryNA",
        nauru => "countryNR",
        nepal => "countryNP",
        netherlands => "countryNL",
        netherlands_antilles => "countryAN",
        new_caledonia => "countryNC",
        new_zealand => "countryNZ",
        nicaragua => "countryNI",
        niger => "countryNE",
        nigeria => "countryNG",
        niue => "countryNU",
        norfolk_island => "countryNF",
        northern_mariana_islands => "countryMP",
        norway => "countryNO",
        oman => "countryOM",
        pakistan => "countryPK",
        palau => "countryPW",
        palestinian_territory => "countryPS",
        panama => "countryPA",
        papua_new_guinea => "countryPG",
        paraguay => "countryPY",
        peru => "countryPE",
        philippines => "countryPH",
        pitcairn => "countryPN",
        poland => "countryPL",
        portugal => "countryPT",
        puerto_rico => "countryPR",
        qatar => "countryQA",
        reunion => "countryRE",
        romania => "countryRO",
        russian_federation => "countryRU",
        rwanda => "countryRW",
        saint_helena => "countrySH",
        saint_kitts_and_nevis => "countryKN",
        saint_lucia => "countryLC",
        saint_pierre_and_miquelon => "countryPM",
        saint_vincent_and_the_grenadines => "countryVC",
        samoa => "countryWS",
        san_marino => "countrySM",
        sao_tome_and_principe => "countryST",
        saudi_arabia => "countrySA",
        senegal => "countrySN",
        serbia_and_montenegro => "countryCS",
        seychelles => "countrySC",
        sierra_leone => "countrySL",
        singapore => "countrySG",
        slovakia => "countrySK",
        slovenia => "countrySI",
        solomon_islands => "countrySB",
        somalia => "countrySO",
        south_africa => "countryZA",
        south_georgia_and_the_south_sandwich_islands => "countryGS",
        spain => "countryES",
        sri_lanka => "countryLK",
        sudan => "countrySD",
        suriname => "countrySR",
        svalbard_and_jan_mayen => "countrySJ",
        swaziland => "countrySZ",
        sweden => "countrySE",
        switzerland => "countryCH",
        syrian_arab_republic => "countrySY",
        _province_of_china_taiwan => "countryTW",
        tajikistan => "countryTJ",
        _united_republic_of_tanzania => "countryTZ",
        thailand => "countryTH",
        togo => "countryTG",
        tokelau => "countryTK",
        tonga => "countryTO",
        trinidad_and_tobago => "countryTT",
        tunisia => "countryTN",
        turkey => "countryTR",
        turkmenistan => "countryTM",
        turks_and_caicos_islands => "countryTC",
        tuvalu => "countryTV",
        uganda => "countryUG",
        ukraine => "countryUA",
        united_arab_emirates => "countryAE",
        united_kingdom => "countryUK",
        united_states => "countryUS",
        united_states_minor_outlying_islands => "countryUM",
        uruguay => "countryUY",
        uzbekistan => "countryUZ",
        vanuatu => "countryVU",
        venezuela => "countryVE",
        vietnam => "countryVN",
        _british_virgin_islands => "countryVG",
        _us_virgin_islands => "countryVI",
        wallis_and_futuna => "countryWF",
        western_sahara => "countryEH",
        yemen => "countryYE",
        yugoslavia => "countryYU",
        zambia => "countryZM",
        zimbabwe => "countryZW",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        CountryCode::verify_table().unwrap();
        assert_eq!(CountryCode::flag_count(), 242);
    }

    #[test]
    fn test_spot_check_tokens() {
        let us = CountryCode::from_flags([("united_states", true)]).unwrap();
        assert_eq!(us.to_query_param().as_deref(), Some("countryUS"));

        let pair = CountryCode::from_flags([
            ("germany", true),
            ("france", true),
        ])
        .unwrap();
        // France registers before Germany, so its token leads.
        assert_eq!(pair.to_query_param().as_deref(), Some("countryFR|countryDE"));
    }

    #[test]
    fn test_everything_except_one_country() {
        let mut countries = CountryCode::all();
        countries.set("zimbabwe", false).unwrap();
        assert_eq!(countries.to_query_param().as_deref(), Some("-(countryZW)"));
    }

    #[test]
    fn test_exact_half_of_even_table_stays_positive() {
        // 121 of 242 enabled is exactly half: the negation branch requires
        // strictly more, so this still serializes as a positive list.
        let mut countries = CountryCode::none();
        let names: Vec<_> = countries.iter().map(|(name, _)| name).take(121).collect();
        for name in &names {
            countries.set(name, true).unwrap();
        }
        let wire = countries.to_query_param().unwrap();
        assert!(!wire.starts_with("-("));
        assert_eq!(wire.split('|').count(), 121);
    }
}
