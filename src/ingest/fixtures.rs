/// Test fixtures: representative JSON payloads from the AirKorea
/// 시도별 실시간 측정정보 API (version 1.5).
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned by:
///   http://apis.data.go.kr/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty
///
/// Response shape:
///   response.header.resultCode  — "00" on success, anything else is an
///                                 application-level error
///   response.header.resultMsg
///   response.body.items[]       — one object per monitoring station
///   response.body.{numOfRows, pageNo, totalCount}
///
/// Note: concentrations and grades are JSON strings even though they
/// represent numbers, and a missing measurement may be `null`, `""`, or
/// `"-"`. Parsers must handle all three.

/// Three Seoul stations. 중구 carries full data with grade 2 (보통);
/// 종로구 has a PM2.5 communication fault (placeholder "-"); 한강대로 is a
/// roadside station with no KHAI index.
#[cfg(test)]
pub(crate) fn fixture_seoul_json() -> &'static str {
    r#"{
      "response": {
        "header": { "resultCode": "00", "resultMsg": "NORMAL_CODE" },
        "body": {
          "totalCount": 3,
          "pageNo": 1,
          "numOfRows": 100,
          "items": [
            {
              "stationName": "중구",
              "stationCode": "111121",
              "mangName": "도시대기",
              "sidoName": "서울",
              "dataTime": "2024-05-01 14:00",
              "so2Value": "0.003",
              "coValue": "0.4",
              "o3Value": "0.041",
              "no2Value": "0.019",
              "pm10Value": "45",
              "pm10Value24": "41",
              "pm25Value": "22",
              "pm25Value24": "20",
              "khaiValue": "68",
              "khaiGrade": "2",
              "so2Grade": "1",
              "coGrade": "1",
              "o3Grade": "2",
              "no2Grade": "1",
              "pm10Grade": "2",
              "pm25Grade": "2",
              "pm10Grade1h": "2",
              "pm25Grade1h": "2",
              "so2Flag": null,
              "coFlag": null,
              "o3Flag": null,
              "no2Flag": null,
              "pm10Flag": null,
              "pm25Flag": null
            },
            {
              "stationName": "종로구",
              "stationCode": "111123",
              "mangName": "도시대기",
              "sidoName": "서울",
              "dataTime": "2024-05-01 14:00",
              "so2Value": "0.004",
              "coValue": "0.5",
              "o3Value": "0.038",
              "no2Value": "0.022",
              "pm10Value": "51",
              "pm10Value24": "47",
              "pm25Value": "-",
              "pm25Value24": "-",
              "khaiValue": "72",
              "khaiGrade": "2",
              "so2Grade": "1",
              "coGrade": "1",
              "o3Grade": "2",
              "no2Grade": "1",
              "pm10Grade": "2",
              "pm25Grade": null,
              "pm10Grade1h": "2",
              "pm25Grade1h": null,
              "so2Flag": null,
              "coFlag": null,
              "o3Flag": null,
              "no2Flag": null,
              "pm10Flag": null,
              "pm25Flag": "통신장애"
            },
            {
              "stationName": "한강대로",
              "stationCode": "111131",
              "mangName": "도로변대기",
              "sidoName": "서울",
              "dataTime": "2024-05-01 14:00",
              "so2Value": "0.005",
              "coValue": "0.6",
              "o3Value": "0.030",
              "no2Value": "0.041",
              "pm10Value": "58",
              "pm10Value24": "52",
              "pm25Value": "27",
              "pm25Value24": "24",
              "khaiValue": null,
              "khaiGrade": null,
              "so2Grade": "1",
              "coGrade": "1",
              "o3Grade": "1",
              "no2Grade": "2",
              "pm10Grade": "2",
              "pm25Grade": "2",
              "pm10Grade1h": "2",
              "pm25Grade1h": "2",
              "so2Flag": null,
              "coFlag": null,
              "o3Flag": null,
              "no2Flag": null,
              "pm10Flag": null,
              "pm25Flag": null
            }
          ]
        }
      }
    }"#
}

/// Every station's particulate values are placeholders — exercises the
/// selection fallback past rule 2 to "first entry".
#[cfg(test)]
pub(crate) fn fixture_all_placeholder_json() -> &'static str {
    r#"{
      "response": {
        "header": { "resultCode": "00", "resultMsg": "NORMAL_CODE" },
        "body": {
          "totalCount": 2,
          "pageNo": 1,
          "numOfRows": 100,
          "items": [
            {
              "stationName": "공단",
              "sidoName": "울산",
              "dataTime": "2024-05-01 14:00",
              "pm10Value": "-",
              "pm25Value": null,
              "pm10Flag": "통신장애",
              "pm25Flag": "통신장애"
            },
            {
              "stationName": "야음동",
              "sidoName": "울산",
              "dataTime": "2024-05-01 14:00",
              "pm10Value": "",
              "pm25Value": "-"
            }
          ]
        }
      }
    }"#
}

/// Success envelope with zero stations.
#[cfg(test)]
pub(crate) fn fixture_empty_items_json() -> &'static str {
    r#"{
      "response": {
        "header": { "resultCode": "00", "resultMsg": "NORMAL_CODE" },
        "body": { "totalCount": 0, "pageNo": 1, "numOfRows": 100, "items": [] }
      }
    }"#
}

/// Application-level failure: an unregistered service key. The HTTP status
/// is still 200; only the result code signals the error.
#[cfg(test)]
pub(crate) fn fixture_bad_key_json() -> &'static str {
    r#"{
      "response": {
        "header": {
          "resultCode": "30",
          "resultMsg": "SERVICE_KEY_IS_NOT_REGISTERED_ERROR"
        }
      }
    }"#
}

/// Application-level failure with a body-less NODATA result.
#[cfg(test)]
pub(crate) fn fixture_no_data_error_json() -> &'static str {
    r#"{
      "response": {
        "header": { "resultCode": "03", "resultMsg": "NODATA_ERROR" }
      }
    }"#
}
